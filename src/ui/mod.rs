//! Terminal presentation of the game world.

pub mod canvas;
pub mod game_scene;
