//! Shared data types for the game world.

use crate::constants::{BIRD_SIZE, GROUND_HEIGHT, SCREEN_WIDTH};

/// Width and height of a sprite in world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding-box sizes the world needs from the loaded sprites.
///
/// The world only ever reads rectangles, so it is built from these sizes
/// rather than from the images themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub bird: Size,
    pub ground: Size,
    /// Pipe hanging from the ceiling, above the gap.
    pub pipe_top: Size,
    /// Pipe rising from the ground, below the gap.
    pub pipe_bottom: Size,
}

impl SpriteSizes {
    /// Sizes of the stock artwork (52 × 320 pipes scaled by 1.2).
    pub const fn standard() -> Self {
        Self {
            bird: Size::new(BIRD_SIZE, BIRD_SIZE),
            ground: Size::new(SCREEN_WIDTH, GROUND_HEIGHT),
            pipe_top: Size::new(62.0, 384.0),
            pipe_bottom: Size::new(62.0, 384.0),
        }
    }
}

/// Logical input signals, decoupled from the terminal key that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Start a round (also restarts mid-round).
    Start,
    /// Flap the bird's wings.
    Flap,
    /// Restart after game over.
    Restart,
    /// Leave the game.
    Quit,
    /// Any other key.
    Other,
}

/// What the frame loop should do after an input has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}
