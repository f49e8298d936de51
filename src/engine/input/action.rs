// Game action definitions and key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,

    // Spells
    CastStun,
    CastShield,

    // Meta actions
    Pause,
    Menu,
}

/// Default keyboard bindings. Movement is on both WASD and the arrow keys.
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::KeyW, Action::MoveForward),
        (KeyCode::KeyS, Action::MoveBack),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::ArrowUp, Action::MoveForward),
        (KeyCode::ArrowDown, Action::MoveBack),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::Digit1, Action::CastStun),
        (KeyCode::Digit2, Action::CastShield),
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Menu),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (key, _) in default_bindings() {
            assert!(seen.insert(key), "Duplicate key {:?} in bindings", key);
        }
    }

    #[test]
    fn test_every_action_is_bound() {
        let bound: HashSet<Action> = default_bindings().into_iter().map(|(_, a)| a).collect();
        for action in [
            Action::MoveForward,
            Action::MoveBack,
            Action::MoveLeft,
            Action::MoveRight,
            Action::CastStun,
            Action::CastShield,
            Action::Pause,
            Action::Menu,
        ] {
            assert!(bound.contains(&action), "{:?} has no key", action);
        }
    }

    #[test]
    fn test_arrows_mirror_wasd() {
        let bindings = default_bindings();
        let action_for = |key| bindings.iter().find(|(k, _)| *k == key).map(|(_, a)| *a);
        assert_eq!(action_for(KeyCode::ArrowUp), action_for(KeyCode::KeyW));
        assert_eq!(action_for(KeyCode::ArrowLeft), action_for(KeyCode::KeyA));
    }
}
