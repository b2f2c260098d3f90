//! # lzwin Core
//!
//! Core traits, types, and configuration for the lzwin sliding-window coder.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use lzwin_core::{Codec, WindowConfig};
//! use lzwin_lz77::Lz77Codec;
//!
//! let codec = Lz77Codec::with_window(WindowConfig::new(4096, 15))?;
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod config;
pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use config::{
    WindowConfig, DEFAULT_LOOKAHEAD_WINDOW_SIZE, DEFAULT_WINDOW_SIZE, MAX_LOOKAHEAD_WINDOW_SIZE,
    MAX_WINDOW_SIZE,
};
pub use error::{Error, Result};
pub use stats::{CompressionStats, Metrics};
pub use traits::{Codec, Compressor, Decompressor};
pub use types::CompressionRatio;
