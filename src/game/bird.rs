//! The player-controlled bird.
//!
//! Gravity pulls the bird down every update, a flap overrides the vertical
//! velocity with a fixed upward impulse, and the bird is pinned between the
//! top of the screen and the ground line.

use super::rect::Rect;
use super::types::Size;
use crate::constants::{
    BIRD_SPAWN_X, BIRD_SPAWN_Y, FLAP_VELOCITY, GRAVITY, GROUND_LINE, WING_FRAME_TICKS,
};

/// Which of the two wing sprites is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingFrame {
    Up,
    Down,
}

impl WingFrame {
    pub fn toggled(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bird {
    pub rect: Rect,
    /// Vertical velocity in px/s (positive = downward).
    pub velocity: f64,
    pub wing: WingFrame,
    /// Physics updates since the wing frame last changed.
    pub anim_counter: u32,
}

impl Bird {
    /// Create a bird of the given size at the spawn point.
    pub fn new(size: Size) -> Self {
        Self {
            rect: Rect::centered_at(BIRD_SPAWN_X, BIRD_SPAWN_Y, size.width, size.height),
            velocity: 0.0,
            wing: WingFrame::Up,
            anim_counter: 0,
        }
    }

    /// Put the bird back at the spawn point, at rest.
    pub fn respawn(&mut self) {
        self.rect.set_center(BIRD_SPAWN_X, BIRD_SPAWN_Y);
        self.velocity = 0.0;
    }

    /// Overwrite the vertical velocity with the flap impulse. Not additive.
    pub fn flap(&mut self) {
        self.velocity = FLAP_VELOCITY;
    }

    /// Advance physics and animation by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.velocity += GRAVITY * dt;
        self.rect.y += self.velocity * dt;

        self.animate();

        if self.rect.top() < 0.0 {
            self.rect.set_top(0.0);
            self.velocity = 0.0;
        }
        if self.rect.bottom() > GROUND_LINE {
            self.rect.set_bottom(GROUND_LINE);
            self.velocity = 0.0;
        }
    }

    fn animate(&mut self) {
        self.anim_counter += 1;
        if self.anim_counter >= WING_FRAME_TICKS {
            self.wing = self.wing.toggled();
            self.anim_counter = 0;
        }
    }
}
