//! # lzwin command line
//!
//! File encoding and decoding through the `LZ7T` container, plus the timing
//! and ratio experiments used to pick window sizes.

pub mod commands;
pub mod config;
pub mod error;
pub mod experiment;

pub use commands::{decode_file, decoded_path_for, encode_file, encoded_path_for};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use experiment::{ExperimentOptions, Measurement};
