//! Configuration file loading and defaulting.
//!
//! The file is JSON, looked up first in the working directory and then in the
//! user's configuration directory:
//!
//! ```json
//! { "preset": "glider", "cell-color": "green", "background-color": "black", "fps": 30 }
//! ```
//!
//! A missing file is normal. A file that cannot be read or parsed produces a
//! warning and the defaults are used; startup never fails because of it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::report::Warning;
use crate::term::Palette;
use crate::types::{SessionConfig, DEFAULT_TICK_RATE_HZ, RANDOM_PATTERN};

pub const CONFIG_FILENAME: &str = "life-config.json";

/// Raw contents of the configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FileConfig {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub cell_color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub fps: Option<u32>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing configuration JSON")
    }
}

/// Directory holding the per-user configuration file.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tui-life")
}

/// Candidate file locations, in lookup order.
pub fn search_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(CONFIG_FILENAME), config_dir().join(CONFIG_FILENAME)]
}

/// Load the first existing file among `paths`.
pub fn load_file_config(paths: &[PathBuf], warnings: &mut Vec<Warning>) -> Option<FileConfig> {
    let path = paths.iter().find(|p| p.is_file())?;
    match read_file_config(path) {
        Ok(config) => {
            log::debug!("loaded configuration from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::debug!("ignoring configuration {}: {:#}", path.display(), e);
            warnings.push(Warning::new(
                format!(
                    "Cannot use config file '{}' ({:#}). Continued with defaults.",
                    path.display(),
                    e
                ),
                "Please ensure that the file is readable and the JSON contains no syntactical errors.",
            ));
            None
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    FileConfig::parse(&text)
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub palette: Palette,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::new(RANDOM_PATTERN, DEFAULT_TICK_RATE_HZ),
            palette: Palette::default(),
        }
    }
}

impl AppConfig {
    /// Merge defaults, the file and command-line overrides (highest priority).
    pub fn resolve(
        file: Option<FileConfig>,
        preset: Option<String>,
        fps: Option<u32>,
        warnings: &mut Vec<Warning>,
    ) -> Self {
        let defaults = Self::default();
        let file = file.unwrap_or_default();

        let preset = preset
            .filter(|p| !p.trim().is_empty())
            .or(file.preset)
            .unwrap_or(defaults.session.preset);
        let tick_rate_hz = fps
            .filter(|&f| f != 0)
            .or(file.fps)
            .unwrap_or(defaults.session.tick_rate_hz);

        let (palette, unknown) =
            Palette::from_names(file.cell_color.as_deref(), file.background_color.as_deref());
        for name in unknown {
            warnings.push(Warning::new(
                format!("Unknown color '{}'. Continued with the default color.", name),
                "Use a basic color name such as 'green' or a hex value like '#00ff00'.",
            ));
        }

        Self {
            session: SessionConfig::new(preset, tick_rate_hz),
            palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::named_color;

    #[test]
    fn parses_kebab_case_fields() {
        let config = FileConfig::parse(
            r##"{"preset":"toad","cell-color":"red","background-color":"#000000","fps":12}"##,
        )
        .unwrap();
        assert_eq!(config.preset.as_deref(), Some("toad"));
        assert_eq!(config.cell_color.as_deref(), Some("red"));
        assert_eq!(config.background_color.as_deref(), Some("#000000"));
        assert_eq!(config.fps, Some(12));
    }

    #[test]
    fn partial_file_is_fine() {
        assert_eq!(FileConfig::parse("{}").unwrap(), FileConfig::default());
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(FileConfig::parse("{\"fps\": \"fast\"").is_err());
    }

    #[test]
    fn defaults_without_file_or_args() {
        let mut warnings = Vec::new();
        let config = AppConfig::resolve(None, None, None, &mut warnings);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.preset, "random");
        assert_eq!(config.session.tick_rate_hz, 23);
        assert!(warnings.is_empty());
    }

    #[test]
    fn arguments_override_file() {
        let file = FileConfig {
            preset: Some("toad".into()),
            fps: Some(5),
            ..FileConfig::default()
        };
        let mut warnings = Vec::new();
        let config = AppConfig::resolve(Some(file), Some("glider".into()), Some(40), &mut warnings);
        assert_eq!(config.session, SessionConfig::new("glider", 40));
    }

    #[test]
    fn zero_fps_argument_does_not_override() {
        let file = FileConfig {
            fps: Some(5),
            ..FileConfig::default()
        };
        let mut warnings = Vec::new();
        let config = AppConfig::resolve(Some(file), None, Some(0), &mut warnings);
        assert_eq!(config.session.tick_rate_hz, 5);
    }

    #[test]
    fn file_fps_zero_is_corrected_by_session() {
        let file = FileConfig {
            fps: Some(0),
            ..FileConfig::default()
        };
        let config = AppConfig::resolve(Some(file), None, None, &mut Vec::new());
        assert_eq!(config.session.tick_rate().get(), DEFAULT_TICK_RATE_HZ);
    }

    #[test]
    fn unknown_colors_warn() {
        let file = FileConfig {
            cell_color: Some("blue".into()),
            background_color: Some("plaid".into()),
            ..FileConfig::default()
        };
        let mut warnings = Vec::new();
        let config = AppConfig::resolve(Some(file), None, None, &mut warnings);
        assert_eq!(config.palette.cell.fg, named_color("blue").unwrap());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("'plaid'"));
    }

    #[test]
    fn unreadable_file_warns_and_falls_back() {
        let dir = std::env::temp_dir().join(format!("tui-life-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, "{ not json").unwrap();

        let mut warnings = Vec::new();
        let loaded = load_file_config(&[dir.join("missing.json"), path.clone()], &mut warnings);
        assert_eq!(loaded, None);
        assert_eq!(warnings.len(), 1);

        fs::write(&path, r#"{"preset":"beacon"}"#).unwrap();
        let loaded = load_file_config(&[path.clone()], &mut warnings).unwrap();
        assert_eq!(loaded.preset.as_deref(), Some("beacon"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_files_are_silent() {
        let mut warnings = Vec::new();
        let loaded = load_file_config(&[PathBuf::from("/nonexistent/tui-life.json")], &mut warnings);
        assert_eq!(loaded, None);
        assert!(warnings.is_empty());
    }
}
