//! Loads the game's image files from disk.
//!
//! Every file is required. A missing or unreadable image is fatal: the game
//! reports it and exits before the terminal is taken over.

use super::sprite::Sprite;
use crate::constants::{
    ASSETS_DIR_ENV, BIRD_SIZE, DEFAULT_ASSETS_DIR, GROUND_HEIGHT, PIPE_SCALE, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::game::{SpriteSizes, WingFrame};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BACKGROUND_FILE: &str = "background.png";
pub const GROUND_FILE: &str = "ground.png";
pub const BIRD_WING_UP_FILE: &str = "bird_wing_up.png";
pub const BIRD_WING_DOWN_FILE: &str = "bird_wing_down.png";
pub const PIPE_TOP_FILE: &str = "pipe_top.png";
pub const PIPE_BOTTOM_FILE: &str = "pipe_bottom.png";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{name} image not found at: {}", path.display())]
    Missing { name: &'static str, path: PathBuf },
    #[error("could not decode {name} image at {}: {source}", path.display())]
    Decode {
        name: &'static str,
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Every sprite the game draws, already scaled to its on-screen size.
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: Sprite,
    pub ground: Sprite,
    pub bird: [Sprite; 2],
    /// Pipe hanging down from above the gap.
    pub pipe_top: Sprite,
    /// Pipe rising up from below the gap.
    pub pipe_bottom: Sprite,
}

impl Assets {
    /// Load and scale all images found in `dir`.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let width = SCREEN_WIDTH as u32;
        let bird_size = BIRD_SIZE as u32;

        let background = load_sprite("Background", &dir.join(BACKGROUND_FILE))?
            .scaled_to(width, SCREEN_HEIGHT as u32);
        let ground =
            load_sprite("Ground", &dir.join(GROUND_FILE))?.scaled_to(width, GROUND_HEIGHT as u32);
        let wing_up = load_sprite("Bird (wing up)", &dir.join(BIRD_WING_UP_FILE))?
            .scaled_to(bird_size, bird_size);
        let wing_down = load_sprite("Bird (wing down)", &dir.join(BIRD_WING_DOWN_FILE))?
            .scaled_to(bird_size, bird_size);
        let pipe_top = load_sprite("Pipe (top)", &dir.join(PIPE_TOP_FILE))?.scaled_by(PIPE_SCALE);
        let pipe_bottom =
            load_sprite("Pipe (bottom)", &dir.join(PIPE_BOTTOM_FILE))?.scaled_by(PIPE_SCALE);

        tracing::info!(dir = %dir.display(), "assets loaded");

        Ok(Self {
            background,
            ground,
            bird: [wing_up, wing_down],
            pipe_top,
            pipe_bottom,
        })
    }

    pub fn bird_frame(&self, wing: WingFrame) -> &Sprite {
        match wing {
            WingFrame::Up => &self.bird[0],
            WingFrame::Down => &self.bird[1],
        }
    }

    /// Bounding-box sizes for the world, taken from the scaled sprites.
    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            bird: self.bird[0].size(),
            ground: self.ground.size(),
            pipe_top: self.pipe_top.size(),
            pipe_bottom: self.pipe_bottom.size(),
        }
    }
}

fn load_sprite(name: &'static str, path: &Path) -> Result<Sprite, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing {
            name,
            path: path.to_path_buf(),
        });
    }
    let image = image::open(path).map_err(|source| AssetError::Decode {
        name,
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        name,
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    Ok(Sprite::from_image(image.to_rgba8()))
}

/// Directory to load images from.
///
/// `FLAPPY_ASSETS` wins when set. Otherwise `assets/` in the working
/// directory, falling back to the one shipped next to the sources.
pub fn resolve_assets_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(ASSETS_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let local = PathBuf::from(DEFAULT_ASSETS_DIR);
    if local.is_dir() {
        return local;
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ASSETS_DIR)
}
