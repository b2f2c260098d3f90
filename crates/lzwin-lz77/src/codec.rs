//! LZ77 codec (combined compressor + decompressor).

use lzwin_core::{Codec, Compressor, Decompressor, Result, WindowConfig};

use crate::compress::Lz77Compressor;
use crate::decompress::Lz77Decompressor;
use crate::message::CodedMessage;

/// LZ77 codec combining compression and decompression.
#[derive(Debug, Clone, Default)]
pub struct Lz77Codec {
    compressor: Lz77Compressor,
    decompressor: Lz77Decompressor,
}

impl Lz77Codec {
    /// Create a new LZ77 codec with default windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new LZ77 codec with the given windows.
    pub fn with_window(window: WindowConfig) -> Result<Self> {
        Ok(Self {
            compressor: Lz77Compressor::with_window(window)?,
            decompressor: Lz77Decompressor::new(),
        })
    }

    /// Encode `input` into an in-memory triple message.
    pub fn encode_message(&self, input: &[u8]) -> Result<CodedMessage> {
        self.compressor.encode_message(input)
    }
}

impl Compressor for Lz77Codec {
    fn window(&self) -> WindowConfig {
        self.compressor.window()
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compressor.compress(input)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        self.compressor.max_compressed_size(input_len)
    }
}

impl Decompressor for Lz77Codec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompressor.decompress(input)
    }
}

impl Codec for Lz77Codec {
    fn new() -> Self {
        Lz77Codec::new()
    }

    fn with_window(window: WindowConfig) -> Result<Self> {
        Lz77Codec::with_window(window)
    }
}
