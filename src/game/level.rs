// Level composition loaded from RON

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use super::characters::Template;
use super::combat::SpellBook;

const VILLAGE: &str = include_str!("../../assets/levels/village.ron");

/// Errors that can occur when loading level data
#[derive(Debug, Error)]
pub enum LevelError {
    /// File could not be read
    #[error("Failed to read level '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    #[error("No built-in level named '{0}'")]
    UnknownLevel(String),

    /// A level needs at least the player
    #[error("Level '{0}' has no characters")]
    Empty(String),
}

/// Starting conditions for the player
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    /// Overrides the template's starting health
    pub health: Option<i32>,
    /// Stun charges
    pub stun: u32,
    /// Shield charges
    pub shield: u32,
}

impl PlayerProfile {
    pub fn spell_book(&self) -> SpellBook {
        SpellBook::new(self.stun, self.shield)
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            health: None,
            stun: 2,
            shield: 1,
        }
    }
}

/// One roster entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpawnEntry {
    pub template: Template,
    pub position: (f32, f32, f32),
    /// Clip to start in, by its asset name
    #[serde(default)]
    pub pose: Option<String>,
}

impl SpawnEntry {
    pub fn position(&self) -> Vec3 {
        let (x, y, z) = self.position;
        Vec3::new(x, y, z)
    }
}

/// A level: who stands where. The first entry is the player.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelData {
    pub name: String,
    #[serde(default)]
    pub player: PlayerProfile,
    pub characters: Vec<SpawnEntry>,
}

impl LevelData {
    /// Load a level from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| LevelError::Read {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    /// Load a level compiled into the binary
    pub fn builtin(name: &str) -> Result<Self, LevelError> {
        match name {
            "village" => Self::parse(VILLAGE, "village.ron"),
            _ => Err(LevelError::UnknownLevel(name.to_string())),
        }
    }

    /// Parse level RON. `source` only labels errors.
    pub fn parse(contents: &str, source: &str) -> Result<Self, LevelError> {
        let level: LevelData = ron::from_str(contents).map_err(|e| LevelError::Parse {
            path: source.to_string(),
            details: e.to_string(),
        })?;

        if level.characters.is_empty() {
            return Err(LevelError::Empty(level.name));
        }
        log::info!(
            "Loaded level '{}' with {} characters",
            level.name,
            level.characters.len()
        );
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_village() {
        let level = LevelData::builtin("village").unwrap();
        assert_eq!(level.name, "village");

        let templates: Vec<Template> = level.characters.iter().map(|c| c.template).collect();
        assert_eq!(
            templates,
            vec![
                Template::Hero,
                Template::Mage,
                Template::Archer,
                Template::Grunt,
                Template::Knight,
            ]
        );
        assert_eq!(level.characters[0].position(), Vec3::new(0.0, 0.0, 25.0));
        assert_eq!(level.characters[2].position(), Vec3::new(-1.0, 0.0, 11.0));
        assert_eq!(level.player.spell_book(), SpellBook::new(2, 1));
        assert_eq!(level.player.health, Some(100));
    }

    #[test]
    fn test_unknown_builtin() {
        let err = LevelData::builtin("castle").unwrap_err();
        assert!(matches!(err, LevelError::UnknownLevel(ref name) if name == "castle"));
    }

    #[test]
    fn test_profile_defaults() {
        let level = LevelData::parse(
            r#"(
                name: "duel",
                characters: [
                    (template: Hero, position: (0.0, 0.0, 0.0)),
                    (template: Knight, position: (0.0, 0.0, 3.0)),
                ],
            )"#,
            "duel.ron",
        )
        .unwrap();

        assert_eq!(level.player, PlayerProfile::default());
        assert_eq!(level.characters.len(), 2);
        assert_eq!(level.characters[1].pose, None);
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = LevelData::parse("(name: \"broken\", characters: [", "broken.ron").unwrap_err();
        assert!(matches!(err, LevelError::Parse { .. }));
        assert!(err.to_string().contains("broken.ron"));
    }

    #[test]
    fn test_unknown_template_is_a_parse_error() {
        let err = LevelData::parse(
            "(name: \"odd\", characters: [(template: Dragon, position: (0.0, 0.0, 0.0))])",
            "odd.ron",
        )
        .unwrap_err();
        assert!(matches!(err, LevelError::Parse { .. }));
    }

    #[test]
    fn test_empty_level_rejected() {
        let err = LevelData::parse("(name: \"void\", characters: [])", "void.ron").unwrap_err();
        assert!(matches!(err, LevelError::Empty(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LevelData::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, LevelError::Read { .. }));
    }
}
