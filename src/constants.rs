// Screen geometry (world pixels)
pub const SCREEN_WIDTH: f64 = 650.0;
pub const SCREEN_HEIGHT: f64 = 763.0;
pub const GROUND_HEIGHT: f64 = 150.0;
/// Playable floor. Sits below the top of the ground tile so the bird sinks into the grass.
pub const GROUND_LINE: f64 = 663.0;

// Game timing constants
pub const TARGET_FPS: u32 = 60;
pub const SCROLL_SPEED: f64 = 200.0;
pub const PIPE_SPAWN_THRESHOLD: u32 = 70;
pub const GAME_OVER_DELAY_SECONDS: f64 = 0.5;

// Bird constants
pub const BIRD_SPAWN_X: f64 = 100.0;
pub const BIRD_SPAWN_Y: f64 = 300.0;
pub const BIRD_SIZE: f64 = 50.0;
pub const GRAVITY: f64 = 500.0;
pub const FLAP_VELOCITY: f64 = -250.0;
pub const WING_FRAME_TICKS: u32 = 10;

// Pipe constants
pub const PIPE_SCALE: f64 = 1.2;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_SPAWN_X: f64 = 700.0;
pub const PIPE_OFFSET_MIN: i32 = 300;
pub const PIPE_OFFSET_MAX: i32 = 600;

// Assets
pub const ASSETS_DIR_ENV: &str = "FLAPPY_ASSETS";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
