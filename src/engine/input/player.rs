// Local player input state

use super::action::Action;
use glam::Vec2;
use std::collections::HashSet;

/// Which actions are held, and which went down since the last frame
#[derive(Debug, Default)]
pub struct PlayerInput {
    held: HashSet<Action>,
    pressed_edges: Vec<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Went down since the last `update`
    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed_edges.contains(&action)
    }

    pub(crate) fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            self.pressed_edges.push(action);
        }
    }

    pub(crate) fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    /// Forget this frame's presses; held actions stay held
    pub(crate) fn update(&mut self) {
        self.pressed_edges.clear();
    }

    pub fn reset(&mut self) {
        self.held.clear();
        self.update();
    }

    /// Held movement on the ground plane, not normalised.
    /// x grows to the right, y grows toward the camera.
    pub fn direction(&self) -> Vec2 {
        let axis = |negative, positive| {
            let mut value = 0.0;
            if self.is_pressed(negative) {
                value -= 1.0;
            }
            if self.is_pressed(positive) {
                value += 1.0;
            }
            value
        };

        Vec2::new(
            axis(Action::MoveLeft, Action::MoveRight),
            axis(Action::MoveForward, Action::MoveBack),
        )
    }
}
