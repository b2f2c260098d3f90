//! Command-line error types.

/// Errors surfaced by `lzwin` commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Coding(#[from] lzwin_core::Error),

    #[error("{0}")]
    Usage(String),
}

/// Result type for command-line operations
pub type CliResult<T> = Result<T, CliError>;
