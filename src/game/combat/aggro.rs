// Idle -> hostile conversion and its spread to neighbours

use crate::game::characters::{AnimationState, Character, CharacterId, ClipLibrary, Roster};
use crate::game::events::{animate, Notification};

/// Distance at which the player provokes an idle character, and at which a
/// provoked character pulls its neighbours in
pub const AGGRO_RADIUS: f32 = 10.0;

/// Provoke an idle AI character if the player is close enough.
///
/// A character that turns hostile draws every other living AI character within
/// [`AGGRO_RADIUS`] of it in as well. That spread is a single hop; neighbours
/// pulled in here do not spread it further this call. Returns true when
/// `id` turned hostile.
pub fn check_aggro(
    roster: &mut Roster,
    id: CharacterId,
    clips: &ClipLibrary,
    notifications: &mut Vec<Notification>,
) -> bool {
    let Some(player_position) = roster.player().map(|p| p.position) else {
        return false;
    };
    let Some(character) = roster.get_mut(id) else {
        log::warn!("Aggro check for unknown character {}", id);
        return false;
    };
    if character.is_player() || !character.is_alive() || character.status.is_hostile() {
        return false;
    }
    if character.distance_to(player_position) >= AGGRO_RADIUS {
        return false;
    }

    provoke(character, clips, notifications);
    let origin = character.position;

    for other in roster.all_mut().iter_mut().skip(1) {
        if other.id != id && other.is_alive() && other.distance_to(origin) < AGGRO_RADIUS {
            provoke(other, clips, notifications);
        }
    }
    true
}

fn provoke(character: &mut Character, clips: &ClipLibrary, notifications: &mut Vec<Notification>) {
    if !character.status.provoke() {
        return;
    }
    log::info!("{} #{} turned hostile", character.template.name(), character.id);
    notifications.push(Notification::TurnedHostile { id: character.id });
    animate(character, AnimationState::SwordIdle, clips, notifications);
}
