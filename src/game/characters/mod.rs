// Character system
//
// This module contains everything related to the characters on the field:
// - Character data and the roster that owns them
// - Templates with per-model base stats
// - Hostility status
// - Animation states and the transition gate

pub mod animation;
pub mod character;
pub mod state;
pub mod template;

// Re-export commonly used types
pub use animation::{AnimationState, ClipLibrary};
pub use character::{Character, CharacterId, Roster, PLAYER_ID};
pub use template::{CombatType, Template};
