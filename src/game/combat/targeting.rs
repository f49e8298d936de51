// Target selection

use crate::game::characters::{CharacterId, Roster};

/// Closest living opponent found by [`find_nearest`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestTarget {
    pub id: CharacterId,
    pub distance: f32,
}

/// Find the closest living character other than `from`.
///
/// Ties go to whoever comes first in the roster. `None` when nobody else is
/// alive or `from` is not in the roster.
pub fn find_nearest(from: CharacterId, roster: &Roster) -> Option<NearestTarget> {
    let origin = roster.get(from)?.position;

    let mut nearest: Option<NearestTarget> = None;
    for character in roster.all() {
        if character.id == from || !character.is_alive() {
            continue;
        }
        let distance = character.distance_to(origin);
        if nearest.map_or(true, |best| distance < best.distance) {
            nearest = Some(NearestTarget {
                id: character.id,
                distance,
            });
        }
    }
    nearest
}
