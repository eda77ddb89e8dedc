//! A small RGB framebuffer that sprites are blitted onto, presented to the
//! terminal with half-block cells (two vertical pixels per character).

use crate::assets::sprite::ALPHA_CUTOFF;
use crate::assets::Sprite;
use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Rect;
use ratatui::{buffer::Buffer, layout::Rect as Area, style::Color, widgets::Widget};

const UPPER_HALF_BLOCK: &str = "▀";

/// Framebuffer covering the whole world, scaled down to terminal resolution.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    scale_x: f64,
    scale_y: f64,
    pixels: Vec<[u8; 3]>,
}

impl Canvas {
    /// A canvas of `width` × `height` pixels showing the full world.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            scale_x: width as f64 / SCREEN_WIDTH,
            scale_y: height as f64 / SCREEN_HEIGHT,
            pixels: vec![[0, 0, 0]; width * height],
        }
    }

    /// The largest canvas that fits in `cols` × `rows` cells while keeping
    /// the world's aspect ratio.
    pub fn fit(cols: u16, rows: u16) -> Self {
        let max_w = cols as f64;
        let max_h = rows as f64 * 2.0;
        let scale = (max_w / SCREEN_WIDTH).min(max_h / SCREEN_HEIGHT);
        // Nudge before flooring so an exact fit is not lost to rounding.
        let width = (SCREEN_WIDTH * scale + 1e-9).floor() as usize;
        let height = (SCREEN_HEIGHT * scale + 1e-9).floor() as usize;
        Self::new(width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Terminal cells needed to show the canvas.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.width as u16, self.height.div_ceil(2) as u16)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn clear(&mut self, rgb: [u8; 3]) {
        self.pixels.fill(rgb);
    }

    /// Draw `sprite` stretched over the world-space rect `dest`, skipping
    /// transparent pixels and anything outside the canvas.
    pub fn blit(&mut self, sprite: &Sprite, dest: &Rect) {
        if dest.width <= 0.0 || dest.height <= 0.0 {
            return;
        }

        let x_start = (dest.left() * self.scale_x).floor().max(0.0) as usize;
        let x_end = ((dest.right() * self.scale_x).ceil().max(0.0) as usize).min(self.width);
        let y_start = (dest.top() * self.scale_y).floor().max(0.0) as usize;
        let y_end = ((dest.bottom() * self.scale_y).ceil().max(0.0) as usize).min(self.height);

        for cy in y_start..y_end {
            // Sample at the pixel center, in world coordinates.
            let wy = (cy as f64 + 0.5) / self.scale_y;
            if wy < dest.top() || wy >= dest.bottom() {
                continue;
            }
            let v = ((wy - dest.top()) / dest.height * sprite.height() as f64) as u32;

            for cx in x_start..x_end {
                let wx = (cx as f64 + 0.5) / self.scale_x;
                if wx < dest.left() || wx >= dest.right() {
                    continue;
                }
                let u = ((wx - dest.left()) / dest.width * sprite.width() as f64) as u32;

                if let Some([r, g, b, a]) = sprite.pixel(u, v) {
                    if a >= ALPHA_CUTOFF {
                        self.pixels[cy * self.width + cx] = [r, g, b];
                    }
                }
            }
        }
    }
}

/// Widget presenting a [`Canvas`] with `▀` cells: foreground is the upper
/// pixel, background the lower one.
pub struct CanvasView<'a> {
    canvas: &'a Canvas,
}

impl<'a> CanvasView<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Self { canvas }
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Area, buf: &mut Buffer) {
        let (cols, rows) = self.canvas.cell_size();
        for row in 0..rows.min(area.height) {
            for col in 0..cols.min(area.width) {
                let x = col as usize;
                let y = row as usize * 2;
                let Some(top) = self.canvas.pixel(x, y) else {
                    continue;
                };
                let bottom = self.canvas.pixel(x, y + 1).unwrap_or([0, 0, 0]);

                buf.get_mut(area.x + col, area.y + row)
                    .set_symbol(UPPER_HALF_BLOCK)
                    .set_fg(rgb(top))
                    .set_bg(rgb(bottom));
            }
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn test_fit_keeps_aspect_ratio() {
        let canvas = Canvas::fit(200, 40);
        // Height-bound: 80 pixels tall.
        assert_eq!(canvas.height(), 80);
        assert_eq!(canvas.width(), 68);

        let narrow = Canvas::fit(20, 100);
        assert_eq!(narrow.width(), 20);
        assert!(narrow.height() <= 200);
    }

    #[test]
    fn test_fit_never_empty() {
        let canvas = Canvas::fit(0, 0);
        assert_eq!(canvas.width(), 1);
        assert_eq!(canvas.height(), 1);
    }

    #[test]
    fn test_cell_size_rounds_rows_up() {
        let canvas = Canvas::new(10, 7);
        assert_eq!(canvas.cell_size(), (10, 4));
    }

    #[test]
    fn test_full_screen_blit_fills_canvas() {
        let mut canvas = Canvas::new(65, 76);
        let sprite = Sprite::solid(4, 4, RED);
        canvas.blit(&sprite, &Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT));
        assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(canvas.pixel(64, 75), Some([255, 0, 0]));
    }

    #[test]
    fn test_blit_clips_offscreen() {
        let mut canvas = Canvas::new(65, 76);
        let sprite = Sprite::solid(4, 4, RED);
        canvas.blit(&sprite, &Rect::new(-100.0, -100.0, 150.0, 150.0));
        canvas.blit(&sprite, &Rect::new(700.0, 0.0, 62.0, 384.0));
        assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(64, 0), Some([0, 0, 0]));
    }

    #[test]
    fn test_transparent_pixels_skipped() {
        let mut canvas = Canvas::new(65, 76);
        canvas.clear([0, 0, 255]);
        let sprite = Sprite::solid(4, 4, [255, 0, 0, 0]);
        canvas.blit(&sprite, &Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT));
        assert_eq!(canvas.pixel(30, 30), Some([0, 0, 255]));
    }

    #[test]
    fn test_view_writes_half_blocks() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear([1, 2, 3]);
        let area = Area::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&canvas).render(area, &mut buf);

        let cell = buf.get(0, 0);
        assert_eq!(cell.symbol(), UPPER_HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(1, 2, 3));
        assert_eq!(cell.bg, Color::Rgb(1, 2, 3));
        // Past the canvas width nothing is drawn.
        assert_eq!(buf.get(3, 0).symbol(), " ");
    }
}
