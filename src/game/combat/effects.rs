// Spells and the timed status effects they apply

use std::fmt;

use crate::game::characters::Roster;
use crate::game::events::Notification;

/// Hostiles within this distance of the player get stunned
pub const STUN_RADIUS: f32 = 10.0;
/// Seconds a stun lasts
pub const STUN_DURATION: f32 = 5.0;
/// Seconds the shield lasts
pub const SHIELD_DURATION: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spell {
    /// Slows every nearby hostile
    Stun,
    /// Makes the player immune to damage
    Shield,
}

impl Spell {
    pub fn name(self) -> &'static str {
        match self {
            Self::Stun => "stun",
            Self::Shield => "shield",
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Remaining casts per spell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellBook {
    pub stun: u32,
    pub shield: u32,
}

impl SpellBook {
    pub fn new(stun: u32, shield: u32) -> Self {
        Self { stun, shield }
    }

    pub fn charges(&self, spell: Spell) -> u32 {
        match spell {
            Spell::Stun => self.stun,
            Spell::Shield => self.shield,
        }
    }

    fn charges_mut(&mut self, spell: Spell) -> &mut u32 {
        match spell {
            Spell::Stun => &mut self.stun,
            Spell::Shield => &mut self.shield,
        }
    }

    /// Spend one charge. Fails with a warning when none are left.
    pub fn try_spend(&mut self, spell: Spell, notifications: &mut Vec<Notification>) -> bool {
        let charges = self.charges_mut(spell);
        if *charges == 0 {
            log::warn!("No {} charges left", spell);
            return false;
        }

        *charges -= 1;
        let remaining = *charges;
        notifications.push(Notification::SpellCast { spell, remaining });
        if remaining == 0 {
            notifications.push(Notification::SpellExhausted { spell });
        }
        true
    }
}

impl Default for SpellBook {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

/// Cast a spell for the player, spending a charge on success
pub fn cast(
    roster: &mut Roster,
    spell: Spell,
    book: &mut SpellBook,
    notifications: &mut Vec<Notification>,
) -> bool {
    if !roster.player().is_some_and(|p| p.is_alive()) {
        log::warn!("Cannot cast {} without a living player", spell);
        return false;
    }
    if !book.try_spend(spell, notifications) {
        return false;
    }

    match spell {
        Spell::Stun => {
            let stunned = cast_stun(roster);
            log::info!("Stun cast, {} hostiles affected", stunned);
        }
        Spell::Shield => {
            cast_shield(roster);
            log::info!("Shield up for {}s", SHIELD_DURATION);
        }
    }
    true
}

/// Stun every living hostile near the player. Returns how many were hit.
pub fn cast_stun(roster: &mut Roster) -> usize {
    let Some(origin) = roster.player().map(|p| p.position) else {
        return 0;
    };

    let mut count = 0;
    for character in roster.all_mut().iter_mut().skip(1) {
        if character.is_alive()
            && character.status.is_hostile()
            && character.distance_to(origin) < STUN_RADIUS
        {
            character.stunned = STUN_DURATION;
            count += 1;
        }
    }
    count
}

/// Raise the player's shield
pub fn cast_shield(roster: &mut Roster) {
    if let Some(player) = roster.player_mut() {
        player.shield = SHIELD_DURATION;
    }
}
