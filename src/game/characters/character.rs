// Character entity and roster management

use glam::Vec3;

use super::animation::{AnimationPlayer, AnimationState, ClipLibrary};
use super::state::Status;
use super::template::{CombatType, Template, SPAWN_RELOAD};
use crate::core::math;

/// Position of a character in the roster
pub type CharacterId = usize;

/// The player-controlled character always sits at the front of the roster
pub const PLAYER_ID: CharacterId = 0;

/// A player-controlled or AI-controlled character
#[derive(Debug, Clone)]
pub struct Character {
    /// Roster index
    pub id: CharacterId,
    /// Model preset this character was spawned from
    pub template: Template,

    // Transform
    pub position: Vec3,
    /// Heading around +Y, zero faces +Z
    pub yaw: f32,

    // Stats
    /// Signed on purpose: late hits keep subtracting after death
    pub health: i32,
    /// Base movement speed (units/second)
    pub speed: f32,
    pub combat_type: CombatType,

    // Behaviour
    pub status: Status,
    /// Attack cooldown, an attack is allowed once this is <= 0
    pub reload: f32,
    /// Remaining stun time, slows movement while > 0
    pub stunned: f32,
    /// Remaining shield time, negates all damage while > 0 (player only)
    pub shield: f32,
    /// Walking target; `None` means the character is free to act
    pub destination: Option<Vec3>,

    pub animation: AnimationPlayer,
}

impl Character {
    pub fn new(id: CharacterId, template: Template, position: Vec3) -> Self {
        let stats = template.stats();
        Self {
            id,
            template,
            position,
            yaw: 0.0,
            health: stats.max_health,
            speed: stats.speed,
            combat_type: stats.combat_type,
            status: Status::Idle,
            reload: SPAWN_RELOAD,
            stunned: 0.0,
            shield: 0.0,
            destination: None,
            animation: AnimationPlayer::new(),
        }
    }

    pub fn is_player(&self) -> bool {
        self.id == PLAYER_ID
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_stunned(&self) -> bool {
        self.stunned > 0.0
    }

    pub fn is_shielded(&self) -> bool {
        self.shield > 0.0
    }

    pub fn can_attack(&self) -> bool {
        self.reload <= 0.0 && self.animation.is_idle_equivalent()
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }

    /// Snap the heading toward a point
    pub fn face(&mut self, point: Vec3) {
        self.yaw = math::yaw_towards(self.position, point);
    }

    /// Turn toward a point by at most `max_step` radians
    pub fn turn_towards(&mut self, point: Vec3, max_step: f32) {
        let target = math::yaw_towards(self.position, point);
        self.yaw = math::turn_towards(self.yaw, target, max_step);
    }

    /// Count down the attack cooldown
    pub fn cool_down(&mut self, dt: f32) {
        self.reload -= dt;
    }

    /// Count down stun and shield; they simply read as expired once <= 0
    pub fn tick_effects(&mut self, dt: f32) {
        self.stunned -= dt;
        self.shield -= dt;
    }

    /// Request an animation through the transition gate
    pub fn play(&mut self, state: AnimationState, clips: &ClipLibrary) -> bool {
        self.animation.request(state, clips)
    }

    pub fn current_animation(&self) -> Option<AnimationState> {
        self.animation.active()
    }

    /// Advance animation timing. When a one-shot finishes the character falls
    /// back to its stance; the stance it switched to is returned.
    pub fn update_animation(&mut self, dt: f32, clips: &ClipLibrary) -> Option<AnimationState> {
        let finished = self.animation.update(dt, clips)?;
        let next = finished.follow_up()?;
        self.animation.request(next, clips).then_some(next)
    }
}

/// Ordered set of every simulated character, player first.
///
/// Characters are never removed or reordered; the dead stay in place.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
        }
    }

    /// Add a character at the end of the roster. The first spawn is the player.
    pub fn spawn(&mut self, template: Template, position: Vec3, clips: &ClipLibrary) -> CharacterId {
        let id = self.characters.len();
        let mut character = Character::new(id, template, position);
        character.play(AnimationState::Idle, clips);
        self.characters.push(character);
        id
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id)
    }

    pub fn player(&self) -> Option<&Character> {
        self.characters.first()
    }

    pub fn player_mut(&mut self) -> Option<&mut Character> {
        self.characters.first_mut()
    }

    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    pub fn all_mut(&mut self) -> &mut [Character] {
        &mut self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.characters.iter().filter(|c| c.is_alive()).count()
    }

    /// Living AI characters that have turned on the player
    pub fn hostile_count(&self) -> usize {
        self.characters
            .iter()
            .skip(1)
            .filter(|c| c.is_alive() && c.status.is_hostile())
            .count()
    }
}
