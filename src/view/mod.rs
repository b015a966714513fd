//! View module - draws a [`RenderModel`] into the window surface

pub mod fonts;
pub mod frame;

pub use fonts::FontSet;
pub use frame::{Frame, TextPainter};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use fontdue::{LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use aurum::config::FontConfig;
use aurum::model::{gutter_border_x, text_start_x, RenderModel, GUTTER_PADDING_PX};
use aurum::util::expand_tabs;

use fonts::Face;

/// Space above the first line (pixels)
pub const TOP_PADDING_PX: usize = 8;
/// Width of the cursor bar (pixels)
const CURSOR_WIDTH_PX: usize = 2;

pub type GlyphCacheKey = (char, u32, Face);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

pub struct Renderer {
    fonts: FontSet,
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
}

impl Renderer {
    /// Create a renderer for `window`, scaling the configured font size by
    /// the window's scale factor
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font_config: &FontConfig,
    ) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        let fonts = FontSet::load(font_config)?;
        let font_size = font_config.size * scale_factor as f32;

        let line_metrics = fonts
            .regular()
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow!("Font missing horizontal line metrics"))?;

        let (metrics, _) = fonts.regular().rasterize('M', font_size);
        let char_width = metrics.advance_width;

        let mut renderer = Self {
            fonts,
            surface,
            width: 0,
            height: 0,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    /// Line height including the two pixel gap between lines
    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize + 2
    }

    /// Resize the surface to match the window
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let w = NonZeroU32::new(width.max(1)).ok_or_else(|| anyhow!("Zero surface width"))?;
        let h = NonZeroU32::new(height.max(1)).ok_or_else(|| anyhow!("Zero surface height"))?;
        self.surface
            .resize(w, h)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        self.width = w.get();
        self.height = h.get();
        Ok(())
    }

    /// How many whole lines and columns fit in the text area
    pub fn text_area_size(&self, preview: bool) -> (usize, usize) {
        let line_height = self.line_height().max(1);
        let lines = (self.height as usize).saturating_sub(TOP_PADDING_PX) / line_height;

        let text_x = text_start_x(self.char_width, preview);
        let columns = if self.char_width > 0.0 {
            ((self.width as f32 - text_x).max(0.0) / self.char_width) as usize
        } else {
            0
        };
        (lines, columns)
    }

    pub fn render(&mut self, model: &RenderModel) -> Result<()> {
        let width = self.width as usize;
        let height = self.height as usize;
        let line_height = self.line_height();
        let char_width = self.char_width;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        let mut frame = Frame::new(&mut buffer, width, height);
        let mut painter = TextPainter::new(
            &self.fonts,
            &mut self.glyph_cache,
            self.font_size,
            self.line_metrics.ascent,
            char_width,
            line_height,
        );

        frame.clear(model.theme.background_color_1.to_argb_u32());
        Self::render_text(&mut frame, &mut painter, model);
        Self::render_cursor(&mut frame, &painter, model);
        if !model.preview {
            Self::render_gutter(&mut frame, &mut painter, model);
        }

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }

    /// Styled tokens of each visible line, one space advance between tokens
    fn render_text(frame: &mut Frame, painter: &mut TextPainter, model: &RenderModel) {
        let text_color = model.theme.text_color.to_argb_u32();
        let char_width = painter.char_width();
        let line_height = painter.line_height();
        let origin_x = text_start_x(char_width, model.preview)
            - model.viewport.horizontal_offset as f32 * char_width;

        let visible = model.viewport.visible_lines();
        let end = visible.end.min(model.line_count());
        for (screen_line, doc_line) in (visible.start..end).enumerate() {
            let y = TOP_PADDING_PX + screen_line * line_height;
            if y >= frame.height() {
                break;
            }

            let mut x = origin_x;
            for (i, token) in model.document[doc_line].iter().enumerate() {
                if i > 0 {
                    x += char_width;
                }
                if x >= frame.width() as f32 {
                    break;
                }
                let text = expand_tabs(&token.text);
                x = painter.draw_styled(frame, x, y, &text, token.style, text_color);
            }
        }
    }

    /// Cursor bar at the tab-expanded column of the raw line
    fn render_cursor(frame: &mut Frame, painter: &TextPainter, model: &RenderModel) {
        if !model.cursor_visible() {
            return;
        }
        let Some(col) = model
            .cursor_visual_col
            .checked_sub(model.viewport.horizontal_offset)
        else {
            return;
        };

        let char_width = painter.char_width();
        let line_height = painter.line_height();
        let x = text_start_x(char_width, model.preview) + col as f32 * char_width;
        let y = TOP_PADDING_PX + (model.cursor_line - model.viewport.vertical_offset) * line_height;

        frame.fill_rect_px(
            x as usize,
            y,
            CURSOR_WIDTH_PX,
            line_height,
            model.theme.cursor_color.to_argb_u32(),
        );
    }

    /// Line numbers on background 2, drawn last so scrolled text never
    /// shows underneath
    fn render_gutter(frame: &mut Frame, painter: &mut TextPainter, model: &RenderModel) {
        let char_width = painter.char_width();
        let line_height = painter.line_height();
        let border_x = gutter_border_x(char_width) as usize;
        let height = frame.height();

        frame.fill_rect_px(
            0,
            0,
            border_x,
            height,
            model.theme.background_color_2.to_argb_u32(),
        );

        let number_color = model.theme.text_color.to_argb_u32();
        let visible = model.viewport.visible_lines();
        let end = visible.end.min(model.line_count());
        for (screen_line, doc_line) in (visible.start..end).enumerate() {
            let y = TOP_PADDING_PX + screen_line * line_height;
            if y >= height {
                break;
            }
            // Right-align line numbers against the gutter border
            let number = format!("{}", doc_line + 1);
            let text_width = number.len() as f32 * char_width;
            let x = border_x as f32 - GUTTER_PADDING_PX - text_width;
            painter.draw(frame, x.max(0.0), y, &number, number_color);
        }

        frame.fill_rect_px(
            border_x,
            0,
            1,
            height,
            model.theme.outline_color.to_argb_u32(),
        );
    }
}
