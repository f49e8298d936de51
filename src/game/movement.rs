// Straight-line movement toward a target point

use glam::Vec3;

use super::characters::Character;

/// Speed multiplier while stunned
pub const STUN_SPEED_FACTOR: f32 = 0.4;

/// Current movement speed after status effects
pub fn effective_speed(character: &Character) -> f32 {
    if character.is_stunned() {
        character.speed * STUN_SPEED_FACTOR
    } else {
        character.speed
    }
}

/// Move `character` toward `target` for one step of `delta` seconds.
///
/// Returns true once the character is within `min_distance` (without moving,
/// the boundary counts as arrived) or lands exactly on the target. A step
/// never overshoots.
pub fn move_toward(character: &mut Character, target: Vec3, min_distance: f32, delta: f32) -> bool {
    let distance = character.position.distance(target);
    if distance <= min_distance {
        return true;
    }

    let step = effective_speed(character) * delta;
    if step > distance {
        character.position = target;
        return true;
    }

    let direction = (target - character.position).normalize_or_zero();
    character.position += direction * step;
    false
}
