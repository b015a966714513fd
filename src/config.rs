//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/aurum/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Font faces and size used by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    /// Regular face; when unset a list of common monospace fonts is searched
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub bold_path: Option<PathBuf>,
    #[serde(default)]
    pub italic_path: Option<PathBuf>,
    #[serde(default)]
    pub bold_italic_path: Option<PathBuf>,
    #[serde(default = "default_font_size")]
    pub size: f32,
}

fn default_font_size() -> f32 {
    16.0
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            bold_path: None,
            italic_path: None,
            bold_italic_path: None,
            size: default_font_size(),
        }
    }
}

/// Initial window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_window_width() -> u32 {
    1000
}

fn default_window_height() -> u32 {
    700
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Theme id loaded at startup (a digit bound to Ctrl+N, or a user theme)
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Periodically write the document while editing
    #[serde(default = "default_autosave")]
    pub autosave: bool,
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

fn default_theme() -> String {
    "1".to_string()
}

fn default_autosave() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            autosave: default_autosave(),
            font: FontConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.theme, "1");
        assert!(config.autosave);
        assert_eq!(config.font.size, 16.0);
        assert_eq!(config.window.width, 1000);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EditorConfig = serde_yaml::from_str("theme: \"3\"\n").unwrap();
        assert_eq!(config.theme, "3");
        assert!(config.autosave);
        assert_eq!(config.font, FontConfig::default());
    }

    #[test]
    fn test_nested_font_section() {
        let yaml = "autosave: false\nfont:\n  path: /tmp/mono.ttf\n  size: 12\n";
        let config: EditorConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.autosave);
        assert_eq!(config.font.path, Some(PathBuf::from("/tmp/mono.ttf")));
        assert_eq!(config.font.size, 12.0);
        assert_eq!(config.font.bold_path, None);
    }
}
