// Character templates - each model preset carries its own base stats

use serde::Deserialize;

/// Starting health for every character
pub const BASE_HEALTH: i32 = 100;

/// Attack cooldown every character spawns with (seconds)
pub const SPAWN_RELOAD: f32 = 1.0;

/// Combat behaviour profile, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatType {
    Melee,
    Archer,
    Mage,
    /// The hero: melee up close, fireballs at range
    All,
}

/// Character model presets available to level data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Template {
    Hero,
    Mage,
    Archer,
    Grunt,
    Knight,
}

/// Per-template stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateStats {
    /// Movement speed (units/second)
    pub speed: f32,
    pub combat_type: CombatType,
    pub max_health: i32,
}

const DEFAULT_STATS: TemplateStats = TemplateStats {
    speed: 1.2,
    combat_type: CombatType::Melee,
    max_health: BASE_HEALTH,
};

impl Template {
    pub fn stats(&self) -> TemplateStats {
        match self {
            Template::Hero => TemplateStats {
                speed: 1.6,
                combat_type: CombatType::All,
                ..DEFAULT_STATS
            },
            Template::Mage => TemplateStats {
                combat_type: CombatType::Mage,
                ..DEFAULT_STATS
            },
            Template::Archer => TemplateStats {
                combat_type: CombatType::Archer,
                ..DEFAULT_STATS
            },
            Template::Grunt => TemplateStats {
                speed: 1.1,
                ..DEFAULT_STATS
            },
            Template::Knight => TemplateStats {
                speed: 1.0,
                ..DEFAULT_STATS
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Hero => "Hero",
            Template::Mage => "Mage",
            Template::Archer => "Archer",
            Template::Grunt => "Grunt",
            Template::Knight => "Knight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = DEFAULT_STATS;
        assert_eq!(stats.speed, 1.2);
        assert_eq!(stats.combat_type, CombatType::Melee);
        assert_eq!(stats.max_health, 100);
    }

    #[test]
    fn test_hero_fights_with_everything() {
        let stats = Template::Hero.stats();
        assert_eq!(stats.combat_type, CombatType::All);
        assert_eq!(stats.speed, 1.6);
    }

    #[test]
    fn test_template_archetypes() {
        assert_eq!(Template::Mage.stats().combat_type, CombatType::Mage);
        assert_eq!(Template::Archer.stats().combat_type, CombatType::Archer);
        assert_eq!(Template::Grunt.stats().combat_type, CombatType::Melee);
        assert_eq!(Template::Knight.stats().combat_type, CombatType::Melee);
    }

    #[test]
    fn test_template_speeds() {
        assert_eq!(Template::Grunt.stats().speed, 1.1);
        assert_eq!(Template::Knight.stats().speed, 1.0);
        assert_eq!(Template::Archer.stats().speed, 1.2);
    }

    #[test]
    fn test_everyone_starts_at_full_health() {
        for template in [
            Template::Hero,
            Template::Mage,
            Template::Archer,
            Template::Grunt,
            Template::Knight,
        ] {
            assert_eq!(template.stats().max_health, BASE_HEALTH);
        }
    }
}
