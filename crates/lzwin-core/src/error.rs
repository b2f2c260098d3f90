//! Error types for LZ77 coding operations.

use thiserror::Error;

/// Result type alias for coding operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Coding error types.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol falls outside the byte alphabet (code points 0..=255).
    #[error("invalid input: code point U+{code_point:04X} at index {index} does not fit in a byte")]
    InvalidInput { index: usize, code_point: u32 },

    /// A triple references output that does not exist.
    #[error("malformed triple #{index} ({distance}, {length}): {reason}")]
    MalformedTriple {
        index: usize,
        distance: usize,
        length: usize,
        reason: &'static str,
    },

    /// Window configuration is unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Container data is corrupted or invalid.
    #[error("corrupted data: {message}")]
    CorruptedData {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Unexpected end of input stream.
    #[error("unexpected EOF after {bytes_read} bytes")]
    UnexpectedEof { bytes_read: usize },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// I/O error from underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported feature or format.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(index: usize, code_point: u32) -> Self {
        Error::InvalidInput { index, code_point }
    }

    /// Create a malformed triple error.
    pub fn malformed(index: usize, distance: usize, length: usize, reason: &'static str) -> Self {
        Error::MalformedTriple {
            index,
            distance,
            length,
            reason,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    /// Create a corrupted data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptedData {
            message: message.into(),
            source: None,
        }
    }

    /// Create a corrupted data error with offset context.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptedData {
            message: format!("{} at offset {}", message.into(), offset),
            source: None,
        }
    }

    /// Wrap a lower-level error as corrupted data.
    pub fn corrupted_by(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::CorruptedData {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bytes_read: usize) -> Self {
        Error::UnexpectedEof { bytes_read }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidInput { .. } => "invalid_input",
            Error::MalformedTriple { .. } => "malformed_triple",
            Error::Configuration(_) => "configuration",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::UnexpectedEof { .. } => "unexpected_eof",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Io(_) => "io_error",
            Error::Unsupported(_) => "unsupported",
        }
    }
}
