//! Flappy - a terminal side-scroller.
//!
//! The simulation lives in `game` and never touches the terminal; `ui`
//! paints it, `input` and `clock` feed it.

pub mod assets;
pub mod clock;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;

pub use constants::*;
pub use game::World;
