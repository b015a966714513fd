//! Font loading
//!
//! The regular face comes from the configured path or, failing that, the
//! first monospace font found on the system. Bold and italic faces are
//! optional; when one is missing the painter synthesizes it from the regular
//! face.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings};

use aurum::config::FontConfig;
use aurum::markup::Style;

/// Monospace fonts tried in order when no font is configured
const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/ubuntu/UbuntuMono-R.ttf",
    "/System/Library/Fonts/Monaco.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Which loaded face a glyph was rasterized from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// Effects applied on top of a face that does not carry them natively
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Synthesis {
    /// Strike each glyph twice, one pixel apart
    pub bold: bool,
    /// Shear glyph rows to the right with height
    pub italic: bool,
}

pub struct FontSet {
    regular: Font,
    bold: Option<Font>,
    italic: Option<Font>,
    bold_italic: Option<Font>,
}

impl FontSet {
    pub fn load(config: &FontConfig) -> Result<Self> {
        let regular = match &config.path {
            Some(path) => load_font(path)?,
            None => load_fallback()?,
        };

        Ok(Self {
            regular,
            bold: load_optional(config.bold_path.as_deref()),
            italic: load_optional(config.italic_path.as_deref()),
            bold_italic: load_optional(config.bold_italic_path.as_deref()),
        })
    }

    pub fn regular(&self) -> &Font {
        &self.regular
    }

    /// Pick the best loaded face for `style` and what has to be synthesized
    pub fn resolve(&self, style: Style) -> (Face, &Font, Synthesis) {
        let synth = |bold, italic| Synthesis { bold, italic };
        match style {
            Style::Normal => (Face::Regular, &self.regular, Synthesis::default()),
            Style::Bold => match &self.bold {
                Some(font) => (Face::Bold, font, Synthesis::default()),
                None => (Face::Regular, &self.regular, synth(true, false)),
            },
            Style::Italic => match &self.italic {
                Some(font) => (Face::Italic, font, Synthesis::default()),
                None => (Face::Regular, &self.regular, synth(false, true)),
            },
            Style::BoldItalic => {
                if let Some(font) = &self.bold_italic {
                    (Face::BoldItalic, font, Synthesis::default())
                } else if let Some(font) = &self.bold {
                    (Face::Bold, font, synth(false, true))
                } else if let Some(font) = &self.italic {
                    (Face::Italic, font, synth(true, false))
                } else {
                    (Face::Regular, &self.regular, synth(true, true))
                }
            }
        }
    }
}

fn load_font(path: &Path) -> Result<Font> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to load font {}: {}", path.display(), e))
}

fn load_fallback() -> Result<Font> {
    for candidate in FALLBACK_FONT_PATHS.iter().map(PathBuf::from) {
        if !candidate.exists() {
            continue;
        }
        match load_font(&candidate) {
            Ok(font) => {
                tracing::info!("Using font {}", candidate.display());
                return Ok(font);
            }
            Err(e) => tracing::debug!("{:#}", e),
        }
    }
    Err(anyhow!(
        "No monospace font found; set font.path in the config file"
    ))
}

fn load_optional(path: Option<&Path>) -> Option<Font> {
    let path = path?;
    match load_font(path) {
        Ok(font) => Some(font),
        Err(e) => {
            tracing::warn!("{:#}; synthesizing the style instead", e);
            None
        }
    }
}
