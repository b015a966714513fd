//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use aurum::markup::Style;

use super::fonts::{FontSet, Synthesis};
use super::GlyphCache;

/// Horizontal shear applied to synthesized italics, in pixels per pixel of
/// height above the baseline
const ITALIC_SHEAR: f32 = 0.2;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer can hold.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);

        for py in y0..y1 {
            let row_start = py * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend `color` into a pixel with the given coverage. Signed coordinates
    /// so glyphs scrolled off the left edge clip cleanly.
    #[inline]
    pub fn blend_pixel(&mut self, x: isize, y: isize, color: u32, alpha: f32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height || alpha <= 0.0 {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }
}

/// Text rendering context that bundles font, glyph cache, and metrics.
pub struct TextPainter<'a> {
    fonts: &'a FontSet,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        fonts: &'a FontSet,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
        line_height: usize,
    ) -> Self {
        Self {
            fonts,
            glyph_cache,
            font_size,
            ascent,
            char_width,
            line_height,
        }
    }

    /// Get the character width for monospace layout calculations
    #[inline]
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw regular text at the specified position
    pub fn draw(&mut self, frame: &mut Frame, x: f32, y: usize, text: &str, color: u32) -> f32 {
        self.draw_styled(frame, x, y, text, Style::Normal, color)
    }

    /// Draw text in one of the markup styles. Returns the x just past the
    /// last glyph.
    pub fn draw_styled(
        &mut self,
        frame: &mut Frame,
        x: f32,
        y: usize,
        text: &str,
        style: Style,
        color: u32,
    ) -> f32 {
        let (face, font, synth) = self.fonts.resolve(style);
        let font_size = self.font_size;
        let mut current_x = x;
        let baseline = y as f32 + self.ascent;

        for ch in text.chars() {
            let key = (ch, font_size.to_bits(), face);
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| font.rasterize(ch, font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;
            let strikes: &[isize] = if synth.bold { &[0, 1] } else { &[0] };

            for bitmap_y in 0..metrics.height {
                let py = (glyph_top + bitmap_y as f32) as isize;
                let shear = row_shear(synth, baseline - (glyph_top + bitmap_y as f32));
                for bitmap_x in 0..metrics.width {
                    let alpha = bitmap
                        .get(bitmap_y * metrics.width + bitmap_x)
                        .copied()
                        .unwrap_or(0);
                    if alpha == 0 {
                        continue;
                    }
                    let px = current_x as isize + bitmap_x as isize + metrics.xmin as isize + shear;
                    for dx in strikes {
                        frame.blend_pixel(px + dx, py, color, alpha as f32 / 255.0);
                    }
                }
            }

            current_x += metrics.advance_width;
        }
        current_x
    }
}

/// Pixel offset for a glyph row `height_above_baseline` pixels up
fn row_shear(synth: Synthesis, height_above_baseline: f32) -> isize {
    if synth.italic {
        (height_above_baseline * ITALIC_SHEAR).round() as isize
    } else {
        0
    }
}
