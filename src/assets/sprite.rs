//! A decoded RGBA image with the two scaling operations the game needs.

use crate::game::Size;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Pixels with alpha below this are treated as transparent when blitting.
pub const ALPHA_CUTOFF: u8 = 128;

#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// A solid-colored sprite, handy for tests and placeholders.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_image(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Size in world pixels.
    pub fn size(&self) -> Size {
        Size::new(self.width() as f64, self.height() as f64)
    }

    /// Resample to an exact size.
    pub fn scaled_to(&self, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self::from_image(imageops::resize(
            &self.image,
            width,
            height,
            FilterType::Nearest,
        ))
    }

    /// Resample by a uniform factor, rounding to whole pixels.
    pub fn scaled_by(&self, factor: f64) -> Self {
        let width = (self.width() as f64 * factor).round() as u32;
        let height = (self.height() as f64 * factor).round() as u32;
        self.scaled_to(width, height)
    }

    /// RGBA of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }
}
