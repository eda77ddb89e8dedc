//! Pipe obstacles: a pair of rectangles around a fixed gap.

use super::rect::Rect;
use super::types::SpriteSizes;
use crate::constants::{PIPE_GAP, PIPE_OFFSET_MAX, PIPE_OFFSET_MIN, PIPE_SPAWN_X};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Pipe {
    /// Obstacle above the gap.
    pub top: Rect,
    /// Obstacle below the gap.
    pub bottom: Rect,
    /// Vertical clearance between the two rects.
    pub gap: f64,
    /// Horizontal scroll speed in px/s.
    pub speed: f64,
}

impl Pipe {
    /// Spawn a pipe just off the right edge with a random gap height.
    pub fn spawn<R: Rng>(rng: &mut R, speed: f64, sizes: &SpriteSizes) -> Self {
        let offset = rng.gen_range(PIPE_OFFSET_MIN..=PIPE_OFFSET_MAX) as f64;
        Self::with_offset(offset, speed, sizes)
    }

    /// Build a pipe whose lower obstacle starts at `offset`.
    /// The upper obstacle always ends exactly `PIPE_GAP` above it.
    pub fn with_offset(offset: f64, speed: f64, sizes: &SpriteSizes) -> Self {
        let bottom = Rect::new(
            PIPE_SPAWN_X,
            offset,
            sizes.pipe_bottom.width,
            sizes.pipe_bottom.height,
        );
        let top = Rect::new(
            PIPE_SPAWN_X,
            offset - PIPE_GAP - sizes.pipe_top.height,
            sizes.pipe_top.width,
            sizes.pipe_top.height,
        );
        Self {
            top,
            bottom,
            gap: PIPE_GAP,
            speed,
        }
    }

    pub fn x(&self) -> f64 {
        self.bottom.x
    }

    /// Scroll both rects left together.
    pub fn update(&mut self, dt: f64) {
        let dx = self.speed * dt;
        self.bottom.x -= dx;
        self.top.x -= dx;
    }

    /// True once the trailing edge has left the screen.
    pub fn is_off_screen(&self) -> bool {
        self.bottom.right() < 0.0
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        rect.intersects(&self.bottom) || rect.intersects(&self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SCROLL_SPEED;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_spawn_position() {
        let mut rng = create_test_rng();
        let pipe = Pipe::spawn(&mut rng, SCROLL_SPEED, &SpriteSizes::standard());
        assert_eq!(pipe.x(), PIPE_SPAWN_X);
        assert_eq!(pipe.top.x, pipe.bottom.x);
        assert!(pipe.bottom.y >= PIPE_OFFSET_MIN as f64);
        assert!(pipe.bottom.y <= PIPE_OFFSET_MAX as f64);
        assert_eq!(pipe.speed, SCROLL_SPEED);
    }

    #[test]
    fn test_gap_is_constant_for_any_offset() {
        let mut rng = create_test_rng();
        let sizes = SpriteSizes::standard();
        for _ in 0..200 {
            let pipe = Pipe::spawn(&mut rng, SCROLL_SPEED, &sizes);
            assert_eq!(pipe.top.bottom(), pipe.bottom.y - PIPE_GAP);
            assert_eq!(pipe.gap, PIPE_GAP);
        }
    }

    #[test]
    fn test_offset_range_inclusive() {
        let sizes = SpriteSizes::standard();
        let low = Pipe::with_offset(PIPE_OFFSET_MIN as f64, SCROLL_SPEED, &sizes);
        let high = Pipe::with_offset(PIPE_OFFSET_MAX as f64, SCROLL_SPEED, &sizes);
        assert_eq!(low.top.y, 300.0 - 200.0 - 384.0);
        assert_eq!(high.top.y, 600.0 - 200.0 - 384.0);
    }

    #[test]
    fn test_update_moves_both_rects_left() {
        let mut pipe = Pipe::with_offset(400.0, SCROLL_SPEED, &SpriteSizes::standard());
        let top_y = pipe.top.y;
        pipe.update(0.5);
        assert_eq!(pipe.bottom.x, PIPE_SPAWN_X - 100.0);
        assert_eq!(pipe.top.x, pipe.bottom.x);
        assert_eq!(pipe.top.y, top_y);
        assert_eq!(pipe.bottom.y, 400.0);
    }

    #[test]
    fn test_off_screen_only_when_right_edge_negative() {
        let mut pipe = Pipe::with_offset(400.0, SCROLL_SPEED, &SpriteSizes::standard());
        pipe.bottom.x = -pipe.bottom.width;
        pipe.top.x = pipe.bottom.x;
        assert!(!pipe.is_off_screen());

        pipe.update(0.001);
        assert!(pipe.is_off_screen());
    }

    #[test]
    fn test_collision_in_gap_and_on_pipe() {
        let pipe = Pipe::with_offset(400.0, SCROLL_SPEED, &SpriteSizes::standard());
        let in_gap = Rect::new(PIPE_SPAWN_X, 300.0, 50.0, 50.0);
        let on_lower = Rect::new(PIPE_SPAWN_X, 420.0, 50.0, 50.0);
        let on_upper = Rect::new(PIPE_SPAWN_X, 150.0, 50.0, 50.0);
        assert!(!pipe.collides_with(&in_gap));
        assert!(pipe.collides_with(&on_lower));
        assert!(pipe.collides_with(&on_upper));
    }
}
