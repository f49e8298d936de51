use std::env;

use anyhow::{Context, Result};
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager, PlayerInput};
use game::characters::PLAYER_ID;
use game::combat::Spell;
use game::{FollowCamera, InputSnapshot, LevelData, Notification, Simulation};

/// Zoom change per mouse wheel line
const ZOOM_STEP: f32 = 0.1;
/// Pixels of touchpad scrolling per wheel line
const PIXELS_PER_LINE: f64 = 40.0;

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Village Skirmish...");

    // A level file on the command line replaces the built-in village
    let level = match env::args().nth(1) {
        Some(path) => {
            LevelData::load(&path).with_context(|| format!("Could not load level {}", path))?
        }
        None => LevelData::builtin("village")?,
    };
    let mut sim = Simulation::from_level(&level);
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Village Skirmish")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    let size = window.inner_size();
    let mut camera = FollowCamera::new(size.width as f32, size.height as f32);
    let mut cursor = Vec2::ZERO;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                camera.resize(size.width as f32, size.height as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button,
                        ..
                    },
                ..
            } => match button {
                // Left click walks to the spot under the cursor, right click stops
                MouseButton::Left => match camera.screen_to_ground(cursor) {
                    Some(point) => {
                        debug!("Walking to ({:.2}, {:.2})", point.x, point.z);
                        sim.set_destination(Some(point));
                    }
                    None => debug!("Click at {:?} missed the ground", cursor),
                },
                MouseButton::Right => sim.set_destination(None),
                _ => {}
            },
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
                };
                camera.set_zoom(camera.zoom - lines * ZOOM_STEP);
                if let Some(player) = sim.roster().player() {
                    camera.follow(player.position);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.player().just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                    log_status(&sim, &game_loop, &camera);
                }
                if input.player().just_pressed(Action::Menu) {
                    info!("Menu requested");
                    game_loop.pause();
                }

                if let Some(delta) = game_loop.begin_frame() {
                    let mut restart = false;
                    for notification in sim.tick(delta, &snapshot(input.player())) {
                        restart |= report(&notification);
                    }
                    if restart {
                        sim = Simulation::from_level(&level);
                        info!("Level '{}' restarted", level.name);
                    }
                    if let Some(player) = sim.roster().player() {
                        camera.follow(player.position);
                    }
                }

                input.update();
                window.request_redraw();
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Per-tick input for the simulation
fn snapshot(input: &PlayerInput) -> InputSnapshot {
    InputSnapshot {
        direction: input.direction(),
        cast_stun: input.just_pressed(Action::CastStun),
        cast_shield: input.just_pressed(Action::CastShield),
    }
}

/// Log a notification. Returns true when the level should restart.
fn report(notification: &Notification) -> bool {
    match notification {
        Notification::HealthChanged { id, health } if *id == PLAYER_ID => {
            info!("Health: {}", health);
        }
        Notification::SpellExhausted { spell } => {
            info!("Out of {} charges", spell);
        }
        Notification::RestartRequested => return true,
        other => debug!("{:?}", other),
    }
    false
}

fn log_status(sim: &Simulation, game_loop: &GameLoop, camera: &FollowCamera) {
    let roster = sim.roster();
    info!(
        "{} t={:.1}s, wall {:.1}s ({} frames, {} ticks, {:.0} fps, last step {:.3}s)",
        if game_loop.is_paused() { "Paused" } else { "Running" },
        sim.time(),
        game_loop.elapsed().as_secs_f32(),
        game_loop.frame_count(),
        game_loop.tick_count(),
        game_loop.fps(),
        game_loop.last_delta()
    );
    info!(
        "{} of {} standing, {} hostile, stun x{}, shield x{}",
        roster.alive_count(),
        roster.len(),
        roster.hostile_count(),
        sim.spells().charges(Spell::Stun),
        sim.spells().charges(Spell::Shield)
    );
    match sim.next_event_time() {
        Some(at) => debug!("{} events pending, next at {:.2}s", sim.pending_events(), at),
        None => debug!("No events pending"),
    }
    debug!("Camera zoom {:.1}, view-projection {:?}", camera.zoom, camera.view_proj_matrix());
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_snapshot_keeps_both_spell_presses() {
        let mut input = InputManager::new();
        input.process_key(KeyCode::Digit1, ElementState::Pressed, false);
        input.process_key(KeyCode::Digit2, ElementState::Pressed, false);

        let first = snapshot(input.player());
        assert!(first.cast_stun);
        assert!(first.cast_shield);
        assert_eq!(first.casts().collect::<Vec<_>>(), vec![Spell::Stun, Spell::Shield]);

        input.update();
        let second = snapshot(input.player());
        assert_eq!(second.casts().count(), 0);
    }

    #[test]
    fn test_snapshot_direction() {
        let mut input = InputManager::new();
        input.process_key(KeyCode::KeyW, ElementState::Pressed, false);
        input.process_key(KeyCode::KeyD, ElementState::Pressed, false);

        let snap = snapshot(input.player());
        assert_eq!(snap.direction, Vec2::new(1.0, -1.0));
        assert_eq!(snap.casts().count(), 0);
    }

    #[test]
    fn test_restart_is_reported() {
        assert!(report(&Notification::RestartRequested));
        assert!(!report(&Notification::Died { id: PLAYER_ID }));
    }
}
