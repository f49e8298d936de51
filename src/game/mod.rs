// Game logic: characters, combat, the per-tick simulation and level data

pub mod camera;
pub mod characters;
pub mod combat;
pub mod events;
pub mod level;
pub mod movement;
pub mod simulation;

pub use camera::FollowCamera;
pub use events::Notification;
pub use level::LevelData;
pub use simulation::{InputSnapshot, Simulation};
