//! LZ77 decompressor: container bytes in, original bytes out.

use lzwin_core::{Decompressor, Result};

use crate::message::CodedMessage;

/// LZ77 decompressor.
///
/// The container carries everything needed to decode, so no window
/// configuration is required.
#[derive(Debug, Clone, Default)]
pub struct Lz77Decompressor;

impl Lz77Decompressor {
    /// Create a new decompressor.
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for Lz77Decompressor {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        CodedMessage::decode_bytes(input)
    }
}
