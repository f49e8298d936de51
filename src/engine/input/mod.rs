// Input handling system
//
// - `action`: game actions and default key bindings
// - `player`: held and just-pressed state for the local player
// - `manager`: turns winit keyboard events into actions
//
// ```rust
// let mut input = InputManager::new();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per frame, after the simulation consumed the input
// input.update();
// ```

pub mod action;
pub mod manager;
pub mod player;

pub use action::Action;
pub use manager::InputManager;
pub use player::PlayerInput;
