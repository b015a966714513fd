//! Command-line argument parsing for the editor
//!
//! `aurum [FILE] [--theme ID] [--no-autosave]`

use std::path::PathBuf;

use clap::Parser;

use crate::config::EditorConfig;

/// File opened when none is given
pub const DEFAULT_FILE: &str = "untitled.txt";

/// A minimal text editor with inline style markup
#[derive(Parser, Debug)]
#[command(
    name = "aurum",
    version,
    about = "A minimal text editor with inline style markup"
)]
pub struct CliArgs {
    /// File to edit; created empty if it does not exist
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Theme to start with (overrides the config file)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Disable periodic autosave
    #[arg(long)]
    pub no_autosave: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// File being edited
    pub path: PathBuf,
    /// Editor config with command-line overrides applied
    pub editor: EditorConfig,
}

impl CliArgs {
    /// Merge the arguments over the loaded config file
    pub fn into_config(self, mut editor: EditorConfig) -> StartupConfig {
        if let Some(theme) = self.theme {
            editor.theme = theme;
        }
        if self.no_autosave {
            editor.autosave = false;
        }
        StartupConfig {
            path: self.file.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE)),
            editor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_defaults_to_untitled() {
        let args = CliArgs::parse_from(["aurum"]);
        let config = args.into_config(EditorConfig::default());
        assert_eq!(config.path, PathBuf::from(DEFAULT_FILE));
        assert!(config.editor.autosave);
        assert_eq!(config.editor.theme, "1");
    }

    #[test]
    fn test_file_argument() {
        let args = CliArgs::parse_from(["aurum", "notes.txt"]);
        let config = args.into_config(EditorConfig::default());
        assert_eq!(config.path, PathBuf::from("notes.txt"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let args = CliArgs::parse_from(["aurum", "--theme", "3", "--no-autosave", "a.txt"]);
        let config = args.into_config(EditorConfig::default());
        assert_eq!(config.editor.theme, "3");
        assert!(!config.editor.autosave);
    }

    #[test]
    fn test_config_file_kept_without_flags() {
        let file_config = EditorConfig {
            theme: "2".to_string(),
            autosave: false,
            ..EditorConfig::default()
        };
        let config = CliArgs::parse_from(["aurum"]).into_config(file_config);
        assert_eq!(config.editor.theme, "2");
        assert!(!config.editor.autosave);
    }
}
