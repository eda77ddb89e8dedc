//! The game world: owns the bird and the pipes and runs one frame at a time.

use super::bird::Bird;
use super::pipe::Pipe;
use super::rect::Rect;
use super::types::{GameInput, InputOutcome, SpriteSizes};
use crate::constants::{
    GAME_OVER_DELAY_SECONDS, GROUND_LINE, PIPE_SPAWN_THRESHOLD, SCREEN_HEIGHT, SCROLL_SPEED,
};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct World {
    /// Set once the player has started a round.
    pub running: bool,
    pub game_over: bool,
    /// Seconds elapsed since the round ended.
    pub game_over_time: f64,
    pub scroll_speed: f64,
    /// Two ground tiles leapfrogging each other for an endless floor.
    pub ground: [Rect; 2],
    /// Frames since the last pipe spawned. Frame-count based, so pipe density
    /// follows the frame rate.
    pub pipe_spawn_counter: u32,
    pub pipes: Vec<Pipe>,
    pub bird: Bird,
    pub sizes: SpriteSizes,
}

impl World {
    pub fn new(sizes: SpriteSizes) -> Self {
        let ground_top = SCREEN_HEIGHT - sizes.ground.height;
        Self {
            running: false,
            game_over: false,
            game_over_time: 0.0,
            scroll_speed: SCROLL_SPEED,
            ground: [
                Rect::new(0.0, ground_top, sizes.ground.width, sizes.ground.height),
                Rect::new(
                    sizes.ground.width,
                    ground_top,
                    sizes.ground.width,
                    sizes.ground.height,
                ),
            ],
            pipe_spawn_counter: 0,
            pipes: Vec::new(),
            bird: Bird::new(sizes.bird),
            sizes,
        }
    }

    /// Start a fresh round. Used for the first start and every restart.
    pub fn reset(&mut self) {
        self.running = true;
        self.game_over = false;
        self.game_over_time = 0.0;
        self.pipes.clear();
        self.pipe_spawn_counter = 0;
        self.bird.respawn();
        tracing::info!("round started");
    }

    /// Apply one logical input signal.
    pub fn handle_input(&mut self, input: GameInput) -> InputOutcome {
        match input {
            GameInput::Quit => return InputOutcome::Quit,
            GameInput::Start => self.reset(),
            GameInput::Flap => {
                if self.is_playing() {
                    self.bird.flap();
                }
            }
            GameInput::Restart => {
                if self.game_over {
                    self.reset();
                }
            }
            GameInput::Other => {}
        }
        InputOutcome::Continue
    }

    /// True while the round is live and physics should run.
    pub fn is_playing(&self) -> bool {
        self.running && !self.game_over
    }

    /// Advance the world by one frame of `dt` seconds.
    pub fn update<R: Rng>(&mut self, dt: f64, rng: &mut R) {
        if self.is_playing() {
            self.scroll_ground(dt);
            self.spawn_pipes(rng);
            self.move_pipes(dt);
            self.bird.update(dt);
            self.check_collisions();
        }

        if self.game_over {
            self.game_over_time += dt;
        }
    }

    fn scroll_ground(&mut self, dt: f64) {
        let dx = self.scroll_speed * dt;
        for tile in &mut self.ground {
            tile.x -= dx;
        }
        if self.ground[0].right() <= 0.0 {
            self.ground[0].x = self.ground[1].right();
        }
        if self.ground[1].right() <= 0.0 {
            self.ground[1].x = self.ground[0].right();
        }
    }

    fn spawn_pipes<R: Rng>(&mut self, rng: &mut R) {
        self.pipe_spawn_counter += 1;
        if self.pipe_spawn_counter > PIPE_SPAWN_THRESHOLD {
            let pipe = Pipe::spawn(rng, self.scroll_speed, &self.sizes);
            tracing::debug!(gap_bottom = pipe.bottom.y, "pipe spawned");
            self.pipes.push(pipe);
            self.pipe_spawn_counter = 0;
        }
    }

    fn move_pipes(&mut self, dt: f64) {
        for pipe in &mut self.pipes {
            pipe.update(dt);
        }
        self.pipes.retain(|pipe| !pipe.is_off_screen());
    }

    /// End the round if the bird touches a pipe or reaches the ground.
    pub fn check_collisions(&mut self) {
        let hit_pipe = self
            .pipes
            .iter()
            .any(|pipe| pipe.collides_with(&self.bird.rect));
        let hit_ground = self.bird.rect.bottom() >= GROUND_LINE;

        if hit_pipe || hit_ground {
            self.game_over = true;
            tracing::info!(
                hit_pipe,
                hit_ground,
                pipes = self.pipes.len(),
                "game over"
            );
        }
    }

    /// The game-over overlay shows after a short grace period.
    pub fn game_over_overlay_visible(&self) -> bool {
        self.game_over && self.game_over_time >= GAME_OVER_DELAY_SECONDS
    }
}
