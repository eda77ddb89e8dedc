//! Image assets: loading, scaling, and the sprite set the game draws with.

pub mod loader;
pub mod sprite;

pub use loader::{resolve_assets_dir, AssetError, Assets};
pub use sprite::Sprite;
