//! Core game simulation.
//!
//! A bird kept airborne by flaps, pipes scrolling in from the right, and the
//! world that ties them together. Nothing here touches the terminal.

pub mod bird;
pub mod pipe;
pub mod rect;
pub mod types;
pub mod world;

pub use bird::{Bird, WingFrame};
pub use pipe::Pipe;
pub use rect::Rect;
pub use types::*;
pub use world::World;
