// Attack policies per combat archetype

use glam::Vec3;

use super::damage::{DamageEffect, Hit};
use super::CombatContext;
use crate::game::characters::{AnimationState, Character, CharacterId, CombatType};
use crate::game::events::{animate, DeferredEvent};
use crate::game::movement::move_toward;

/// Time from the start of a swing to the moment it connects (seconds)
pub const HIT_DELAY: f64 = 0.2;

/// How an attack is delivered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    /// Distance to close to before striking
    pub range: f32,
    /// Cooldown after the attack starts (seconds)
    pub reload: f32,
    pub animation: AnimationState,
    pub damage: i32,
    pub effect: Option<DamageEffect>,
}

pub const MELEE_ATTACK: AttackProfile = AttackProfile {
    range: 1.0,
    reload: 1.0,
    animation: AnimationState::SwordSlash,
    damage: 5,
    effect: None,
};

pub const ARCHER_ATTACK: AttackProfile = AttackProfile {
    range: 8.0,
    reload: 3.0,
    animation: AnimationState::PistolFire,
    damage: 5,
    effect: None,
};

pub const MAGE_ATTACK: AttackProfile = AttackProfile {
    range: 5.0,
    reload: 4.0,
    animation: AnimationState::FightJab,
    damage: 10,
    effect: None,
};

/// The hero's sword, used up close
pub const HERO_SWORD: AttackProfile = AttackProfile {
    range: 1.95,
    reload: 1.0,
    animation: AnimationState::SwordSlash,
    damage: 20,
    effect: None,
};

/// The hero's fireball, used past sword reach
pub const HERO_FIREBALL: AttackProfile = AttackProfile {
    range: 5.0,
    reload: 1.0,
    animation: AnimationState::FightJab,
    damage: 5,
    effect: Some(DamageEffect::Fireball),
};

impl AttackProfile {
    /// Attack an AI character uses. A hero-type AI falls back to melee.
    pub fn for_ai(combat_type: CombatType) -> &'static AttackProfile {
        match combat_type {
            CombatType::Archer => &ARCHER_ATTACK,
            CombatType::Mage => &MAGE_ATTACK,
            CombatType::Melee | CombatType::All => &MELEE_ATTACK,
        }
    }

    /// Attack the player picks for a target at `distance`, if any reaches
    pub fn for_player(distance: f32) -> Option<&'static AttackProfile> {
        if distance <= HERO_SWORD.range {
            Some(&HERO_SWORD)
        } else if distance <= HERO_FIREBALL.range {
            Some(&HERO_FIREBALL)
        } else {
            None
        }
    }
}

/// Where an AI character is in its approach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engagement {
    /// Still closing the distance
    Approaching,
    /// Started an attack this tick
    Striking,
    /// In range, waiting on cooldown or the current action
    Holding,
}

/// Start an attack: face the target, play the attack clip, restart the
/// cooldown and schedule the hit to land [`HIT_DELAY`] seconds from now.
///
/// The hit timing is independent of the clip length.
pub fn start_attack(
    attacker: &mut Character,
    target: CharacterId,
    target_position: Vec3,
    profile: &AttackProfile,
    ctx: &mut CombatContext<'_>,
) {
    attacker.face(target_position);
    animate(attacker, profile.animation, ctx.clips, ctx.notifications);
    attacker.reload = profile.reload;

    log::debug!(
        "#{} {} at #{} (fires at {:.2}s)",
        attacker.id,
        profile.animation.clip_name(),
        target,
        ctx.now + HIT_DELAY
    );
    ctx.queue.schedule(
        ctx.now + HIT_DELAY,
        DeferredEvent::Hit(Hit {
            attacker: attacker.id,
            target,
            amount: profile.damage,
            effect: profile.effect,
        }),
    );
}

/// Close in on a target and strike once in range and ready
pub fn engage(
    attacker: &mut Character,
    target: CharacterId,
    target_position: Vec3,
    profile: &AttackProfile,
    delta: f32,
    ctx: &mut CombatContext<'_>,
) -> Engagement {
    if !move_toward(attacker, target_position, profile.range, delta) {
        animate(attacker, AnimationState::Walking, ctx.clips, ctx.notifications);
        return Engagement::Approaching;
    }

    if attacker.can_attack() {
        start_attack(attacker, target, target_position, profile, ctx);
        return Engagement::Striking;
    }

    if attacker.current_animation() == Some(AnimationState::Walking) {
        animate(attacker, AnimationState::SwordIdle, ctx.clips, ctx.notifications);
    }
    Engagement::Holding
}
