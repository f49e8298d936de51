// Damage application

use crate::game::characters::{AnimationState, CharacterId, ClipLibrary, Roster};
use crate::game::events::{animate, Notification};

/// Extra cooldown a fireball costs its caster when it lands (seconds)
pub const FIREBALL_RELOAD_PENALTY: f32 = 1.0;

/// How long the fireball impact visual stays up (seconds)
pub const FIREBALL_CUE_DURATION: f32 = 0.2;

/// Extra effect riding on a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageEffect {
    Fireball,
}

/// One attack landing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub attacker: CharacterId,
    pub target: CharacterId,
    pub amount: i32,
    pub effect: Option<DamageEffect>,
}

/// What a hit did to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Soaked by the player's shield
    Absorbed,
    Hurt,
    /// Health crossed zero with this hit
    Killed,
    /// Target was already dead; health still drops
    Overkill,
    /// No such character in the roster
    Missing,
}

/// Apply a hit to its target.
///
/// A shielded player takes nothing. Otherwise health drops by the full amount
/// with no clamping, and the target reacts with `Take Damage` or `Die`.
pub fn apply_hit(
    roster: &mut Roster,
    clips: &ClipLibrary,
    hit: &Hit,
    notifications: &mut Vec<Notification>,
) -> DamageOutcome {
    let Some(target) = roster.get_mut(hit.target) else {
        log::warn!("Hit on unknown character {}", hit.target);
        return DamageOutcome::Missing;
    };

    if target.is_player() && target.is_shielded() {
        log::debug!("Shield absorbed {} damage", hit.amount);
        notifications.push(Notification::DamageAbsorbed { id: target.id });
        return DamageOutcome::Absorbed;
    }

    let was_alive = target.is_alive();
    target.health -= hit.amount;
    notifications.push(Notification::HealthChanged {
        id: target.id,
        health: target.health,
    });
    notifications.push(Notification::DamageFlash { id: target.id });

    let outcome = if target.is_alive() {
        animate(target, AnimationState::TakeDamage, clips, notifications);
        DamageOutcome::Hurt
    } else {
        animate(target, AnimationState::Die, clips, notifications);
        if was_alive {
            log::info!("{} #{} died", target.template.name(), target.id);
            notifications.push(Notification::Died { id: target.id });
            DamageOutcome::Killed
        } else {
            DamageOutcome::Overkill
        }
    };
    log::debug!(
        "#{} hit #{} for {} ({:?}), health now {}",
        hit.attacker,
        hit.target,
        hit.amount,
        outcome,
        target.health
    );

    if hit.effect == Some(DamageEffect::Fireball) {
        notifications.push(Notification::EffectCue {
            id: hit.target,
            effect: DamageEffect::Fireball,
            duration: FIREBALL_CUE_DURATION,
        });
        if let Some(attacker) = roster.get_mut(hit.attacker) {
            attacker.reload += FIREBALL_RELOAD_PENALTY;
        }
    }

    outcome
}
