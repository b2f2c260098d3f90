//! Sliding-window configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default history window (maximum back-reference distance).
pub const DEFAULT_WINDOW_SIZE: usize = 65535;

/// Default lookahead window (a match is at most this plus one symbols long).
pub const DEFAULT_LOOKAHEAD_WINDOW_SIZE: usize = 255;

/// Largest history window a container can record (distance is a `u32`).
pub const MAX_WINDOW_SIZE: usize = u32::MAX as usize;

/// Largest lookahead window a container can record (length is a `u16`).
pub const MAX_LOOKAHEAD_WINDOW_SIZE: usize = u16::MAX as usize - 1;

/// History and lookahead bounds for one encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// How far back the match finder searches.
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// How far ahead of the cursor a match may extend.
    #[serde(default = "default_lookahead_window_size")]
    pub lookahead_window_size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            lookahead_window_size: default_lookahead_window_size(),
        }
    }
}

impl WindowConfig {
    /// Create a configuration with explicit bounds.
    pub fn new(window_size: usize, lookahead_window_size: usize) -> Self {
        Self {
            window_size,
            lookahead_window_size,
        }
    }

    /// Replace the history window.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Replace the lookahead window.
    pub fn with_lookahead_window_size(mut self, lookahead_window_size: usize) -> Self {
        self.lookahead_window_size = lookahead_window_size;
        self
    }

    /// Longest match this configuration can produce.
    pub fn max_match_length(&self) -> usize {
        self.lookahead_window_size + 1
    }

    /// Check the bounds are usable and fit the container's field widths.
    pub fn validate(&self) -> Result<()> {
        if self.lookahead_window_size == 0 {
            return Err(Error::configuration(
                "lookahead_window_size must be at least 1",
            ));
        }
        if self.lookahead_window_size > MAX_LOOKAHEAD_WINDOW_SIZE {
            return Err(Error::configuration(format!(
                "lookahead_window_size {} exceeds maximum {}",
                self.lookahead_window_size, MAX_LOOKAHEAD_WINDOW_SIZE
            )));
        }
        if self.window_size > MAX_WINDOW_SIZE {
            return Err(Error::configuration(format!(
                "window_size {} exceeds maximum {}",
                self.window_size, MAX_WINDOW_SIZE
            )));
        }
        Ok(())
    }
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

fn default_lookahead_window_size() -> usize {
    DEFAULT_LOOKAHEAD_WINDOW_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.window_size, 65535);
        assert_eq!(config.lookahead_window_size, 255);
        assert_eq!(config.max_match_length(), 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_lookahead_rejected() {
        let err = WindowConfig::new(16, 0).validate().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_oversized_lookahead_rejected() {
        let config = WindowConfig::new(16, MAX_LOOKAHEAD_WINDOW_SIZE + 1);
        assert!(config.validate().is_err());
        assert!(WindowConfig::new(16, MAX_LOOKAHEAD_WINDOW_SIZE)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_zero_window_is_valid() {
        // A zero history window degenerates to literal-only output but is usable.
        assert!(WindowConfig::new(0, 4).validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = WindowConfig::default()
            .with_window_size(1024)
            .with_lookahead_window_size(15);
        assert_eq!(config, WindowConfig::new(1024, 15));
    }
}
