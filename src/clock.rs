//! Frame timing: measured delta time and a frame-rate cap.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / target_fps.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Seconds since the previous call (or since construction).
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;
        dt
    }

    /// Time left in the current frame's budget.
    pub fn remaining(&self) -> Duration {
        self.frame_budget.saturating_sub(self.last_tick.elapsed())
    }

    /// Sleep until the frame budget is used up.
    pub fn wait_for_next_frame(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}
