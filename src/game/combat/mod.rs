// Combat: targeting, attacks, damage, spells and aggro

pub mod aggro;
pub mod damage;
pub mod effects;
pub mod policy;
pub mod targeting;

pub use aggro::check_aggro;
pub use damage::{apply_hit, DamageEffect, DamageOutcome, Hit};
pub use effects::{cast, Spell, SpellBook};
pub use policy::{engage, start_attack, AttackProfile};
pub use targeting::find_nearest;

use super::characters::ClipLibrary;
use super::events::{EventQueue, Notification};

/// Shared state an attack needs while it is being started
pub struct CombatContext<'a> {
    pub clips: &'a ClipLibrary,
    pub queue: &'a mut EventQueue,
    pub notifications: &'a mut Vec<Notification>,
    /// Current simulation time
    pub now: f64,
}
