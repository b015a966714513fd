//! Theme system for the editor
//!
//! Themes are small YAML (or JSON) files with five colors. Built-in themes
//! are embedded at compile time; user themes live in the config directory
//! and take priority.
//!
//! Theme loading priority for an id such as `"2"`:
//! 1. User config: `~/.config/aurum/themes/2.yaml`, then `2.json`
//! 2. Embedded: Built-in themes compiled into binary

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const SOLARIZED_YAML: &str = include_str!("../themes/solarized.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Identifier bound to a digit key
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "1",
        yaml: DARK_YAML,
    },
    BuiltinTheme {
        id: "2",
        yaml: LIGHT_YAML,
    },
    BuiltinTheme {
        id: "3",
        yaml: SOLARIZED_YAML,
    },
];

/// Alias accepted for the first built-in theme
pub const DEFAULT_THEME_ID: &str = "default";

/// Errors raised while resolving a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    NotFound(String),
    IoError(String),
    ParseError(String),
    InvalidColor(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::NotFound(id) => write!(f, "Theme not found: {}", id),
            ThemeError::IoError(e) => write!(f, "IO error: {}", e),
            ThemeError::ParseError(e) => write!(f, "Parse error: {}", e),
            ThemeError::InvalidColor(c) => write!(f, "Invalid color: {}", c),
        }
    }
}

impl std::error::Error for ThemeError {}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, ThemeError> {
        let hex = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| ThemeError::InvalidColor(s.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ThemeError::InvalidColor(s.to_string())),
        }
    }
}

/// A color as written in a theme file: hex string or `[r, g, b(, a)]`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Components(Vec<u8>),
}

impl ColorValue {
    pub fn resolve(&self) -> Result<Color, ThemeError> {
        match self {
            ColorValue::Hex(s) => Color::from_hex(s),
            ColorValue::Components(c) => match c.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
                _ => Err(ThemeError::InvalidColor(format!("{:?}", c))),
            },
        }
    }
}

/// Raw theme data as parsed from a theme file.
///
/// The camelCase aliases accept the JSON theme files of earlier releases.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "textColor")]
    pub text_color: ColorValue,
    #[serde(alias = "backgroundColor", alias = "backgroundColor1")]
    pub background_color_1: ColorValue,
    #[serde(default, alias = "backgroundColor2")]
    pub background_color_2: Option<ColorValue>,
    #[serde(alias = "cursorColor")]
    pub cursor_color: ColorValue,
    #[serde(alias = "outlineColor")]
    pub outline_color: ColorValue,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub text_color: Color,
    /// Editor background
    pub background_color_1: Color,
    /// Gutter background
    pub background_color_2: Color,
    pub cursor_color: Color,
    /// Gutter separator
    pub outline_color: Color,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| ThemeError::ParseError(e.to_string()))?;
        Self::from_data(data)
    }

    /// Load theme from JSON string
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let data: ThemeData =
            serde_json::from_str(json).map_err(|e| ThemeError::ParseError(e.to_string()))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, ThemeError> {
        let id = if id == DEFAULT_THEME_ID { "1" } else { id };
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ThemeError::NotFound(id.to_string()))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, ThemeError> {
        let background_color_1 = data.background_color_1.resolve()?;
        let background_color_2 = match &data.background_color_2 {
            Some(value) => value.resolve()?,
            None => background_color_1,
        };
        Ok(Theme {
            name: data.name.unwrap_or_else(|| "Untitled".to_string()),
            text_color: data.text_color.resolve()?,
            background_color_1,
            background_color_2,
            cursor_color: data.cursor_color.resolve()?,
            outline_color: data.outline_color.resolve()?,
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Aurum Dark".to_string(),
                text_color: Color::rgb(0xD4, 0xD4, 0xD4),
                background_color_1: Color::rgb(0x1E, 0x1E, 0x1E),
                background_color_2: Color::rgb(0x25, 0x25, 0x26),
                cursor_color: Color::rgb(0xFF, 0xFF, 0xFF),
                outline_color: Color::rgb(0x3C, 0x3C, 0x3C),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

/// Load a theme from a YAML or JSON file, chosen by extension
pub fn from_file(path: &Path) -> Result<Theme, ThemeError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ThemeError::IoError(format!("{}: {}", path.display(), e)))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        Theme::from_json(&content)
    } else {
        Theme::from_yaml(&content)
    }
}

/// Source of themes for the edit session
pub trait ThemeProvider {
    /// Resolve a theme by identifier. A missing theme is an error and the
    /// caller keeps whatever theme it had.
    fn load_theme(&self, id: &str) -> Result<Theme, ThemeError>;
}

/// Themes from the user theme directory with built-in fallback
#[derive(Debug, Clone, Default)]
pub struct ThemeLibrary {
    user_dir: Option<PathBuf>,
}

impl ThemeLibrary {
    /// Library rooted at `~/.config/aurum/themes/`
    pub fn new() -> Self {
        Self {
            user_dir: crate::config_paths::themes_dir(),
        }
    }

    /// Library rooted at a specific directory
    pub fn with_user_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            user_dir: Some(dir.into()),
        }
    }

    /// Library with only the embedded themes
    pub fn builtin_only() -> Self {
        Self { user_dir: None }
    }

    fn user_theme_path(&self, id: &str) -> Option<PathBuf> {
        let dir = self.user_dir.as_ref()?;
        ["yaml", "yml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{}.{}", id, ext)))
            .find(|path| path.exists())
    }
}

impl ThemeProvider for ThemeLibrary {
    fn load_theme(&self, id: &str) -> Result<Theme, ThemeError> {
        if let Some(path) = self.user_theme_path(id) {
            tracing::info!("Loading user theme from {}", path.display());
            return from_file(&path);
        }

        tracing::info!("Loading builtin theme: {}", id);
        Theme::from_builtin(id)
    }
}
