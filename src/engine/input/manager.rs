// Input manager - maps keyboard events to actions

use super::action::{default_bindings, Action};
use super::player::PlayerInput;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Routes physical keys through the bindings into the player's input state
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    player: PlayerInput,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key transition. OS key repeats are ignored.
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let Some(&action) = self.bindings.get(&key_code) else {
            return;
        };
        match state {
            ElementState::Pressed if !repeat => self.player.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.player.release(action),
        }
    }

    /// Clear per-frame edges. Call once per frame after the input was consumed.
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Drop all held keys, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_key_press() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyW, ElementState::Pressed, false);
        assert!(manager.player().is_pressed(Action::MoveForward));
        assert!(manager.player().just_pressed(Action::MoveForward));
    }

    #[test]
    fn test_arrow_keys_move() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ArrowLeft, ElementState::Pressed, false);
        assert!(manager.player().is_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyQ, ElementState::Pressed, false);
        assert_eq!(manager.player().direction(), glam::Vec2::ZERO);
    }

    #[test]
    fn test_repeat_ignored() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::Digit1, ElementState::Pressed, false);
        manager.update();
        manager.process_key(KeyCode::Digit1, ElementState::Pressed, true);
        assert!(!manager.player().just_pressed(Action::CastStun));
    }

    #[test]
    fn test_release_and_update() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::Digit2, ElementState::Pressed, false);
        manager.update();
        manager.process_key(KeyCode::Digit2, ElementState::Released, false);

        assert!(!manager.player().is_pressed(Action::CastShield));
        assert!(!manager.player().just_pressed(Action::CastShield));

        manager.process_key(KeyCode::Digit2, ElementState::Pressed, false);
        assert!(manager.player().just_pressed(Action::CastShield));
    }

    #[test]
    fn test_both_spell_keys_in_one_frame() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::Digit1, ElementState::Pressed, false);
        manager.process_key(KeyCode::Digit2, ElementState::Pressed, false);

        assert!(manager.player().just_pressed(Action::CastStun));
        assert!(manager.player().just_pressed(Action::CastShield));
    }

    #[test]
    fn test_reset_drops_held_keys() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyD, ElementState::Pressed, false);
        manager.reset();
        assert!(!manager.player().is_pressed(Action::MoveRight));
    }
}
