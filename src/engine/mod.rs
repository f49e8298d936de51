// Engine modules: frame clock and input

pub mod game_loop;
pub mod input;
