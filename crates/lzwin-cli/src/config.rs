//! Command-line configuration.

use serde::Deserialize;
use std::path::Path;

use lzwin_core::WindowConfig;

use crate::error::CliResult;

/// Settings loadable from a TOML file.
///
/// ```toml
/// log_level = "debug"
///
/// [window]
/// window_size = 4096
/// lookahead_window_size = 15
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CliConfig {
    /// Sliding-window bounds used for encoding
    #[serde(default)]
    pub window: WindowConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse configuration text.
    pub fn from_toml(text: &str) -> CliResult<Self> {
        let config: CliConfig = toml::from_str(text)?;
        config.window.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        window_size: Option<usize>,
        lookahead_window_size: Option<usize>,
        log_level: Option<String>,
    ) -> CliResult<Self> {
        if let Some(window_size) = window_size {
            self.window.window_size = window_size;
        }
        if let Some(lookahead) = lookahead_window_size {
            self.window.lookahead_window_size = lookahead;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self.window.validate()?;
        Ok(self)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_window_table() {
        let config = CliConfig::from_toml("[window]\nlookahead_window_size = 15\n").unwrap();
        assert_eq!(config.window, WindowConfig::new(65535, 15));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_window_rejected() {
        let err = CliConfig::from_toml("[window]\nlookahead_window_size = 0\n").unwrap_err();
        assert!(matches!(err, CliError::Coding(_)));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            CliConfig::from_toml("window = ["),
            Err(CliError::Toml(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::default()
            .with_overrides(Some(128), Some(7), Some("debug".into()))
            .unwrap();
        assert_eq!(config.window, WindowConfig::new(128, 7));
        assert_eq!(config.log_level, "debug");

        assert!(CliConfig::default()
            .with_overrides(None, Some(0), None)
            .is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lzwin.toml");
        std::fs::write(&path, "log_level = \"warn\"\n[window]\nwindow_size = 512\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.window.window_size, 512);
        assert_eq!(config.log_level, "warn");
    }
}
