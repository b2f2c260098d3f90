//! LZ77 compressor: bytes in, container bytes out.

use lzwin_core::{Compressor, Result, WindowConfig};

use crate::encoder::encode;
use crate::message::{CodedMessage, HEADER_SIZE, TRIPLE_SIZE};

/// LZ77 compressor.
#[derive(Debug, Clone, Default)]
pub struct Lz77Compressor {
    window: WindowConfig,
}

impl Lz77Compressor {
    /// Create a new compressor with the default windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compressor with the given windows.
    pub fn with_window(window: WindowConfig) -> Result<Self> {
        window.validate()?;
        Ok(Self { window })
    }

    /// Encode `input` into an in-memory triple message.
    pub fn encode_message(&self, input: &[u8]) -> Result<CodedMessage> {
        Ok(CodedMessage::new(encode(input, &self.window)?))
    }
}

impl Compressor for Lz77Compressor {
    fn window(&self) -> WindowConfig {
        self.window
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode_message(input)?.to_bytes()
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Worst case is one literal triple per input byte.
        HEADER_SIZE + input_len * TRIPLE_SIZE
    }
}
