// Core utilities shared by the engine and the game

pub mod math;
