//! Binary container for a triple stream.
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! offset  size  field
//! 0       4     magic "LZ7T"
//! 4       1     version (1)
//! 5       1     flags (bit 0: final triple has no symbol)
//! 6       2     reserved, zero
//! 8       8     decoded length in bytes
//! 16      8     triple count
//! 24      7*n   triples: distance u32, length u16, next u8
//! ```
//!
//! Only the final triple may lack a symbol, so a single flag bit records it;
//! its `next` byte is written as zero.

use std::io::Write;

use lzwin_core::{CompressionRatio, Error, Result};

use crate::decoder::decode;
use crate::triple::Triple;

/// Container magic bytes.
pub const MAGIC: [u8; 4] = *b"LZ7T";

/// Current container version.
pub const VERSION: u8 = 1;

/// Size of the fixed header.
pub const HEADER_SIZE: usize = 24;

/// Size of one encoded triple.
pub const TRIPLE_SIZE: usize = 7;

const FLAG_FINAL_WITHOUT_SYMBOL: u8 = 0x01;

/// A triple stream together with the length it decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodedMessage {
    triples: Vec<Triple>,
}

impl CodedMessage {
    /// Wrap an encoder's output.
    pub fn new(triples: Vec<Triple>) -> Self {
        Self { triples }
    }

    /// The triples, in decode order.
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Take ownership of the triples.
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    /// Get triple `n`.
    pub fn triple(&self, n: usize) -> Option<&Triple> {
        self.triples.get(n)
    }

    /// Number of triples.
    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    /// Number of bytes the triples decode to.
    pub fn decoded_len(&self) -> usize {
        self.triples.iter().map(Triple::decoded_len).sum()
    }

    /// Size of the binary form in bytes.
    pub fn encoded_size(&self) -> usize {
        HEADER_SIZE + self.triples.len() * TRIPLE_SIZE
    }

    /// Ratio of decoded length to binary size.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.decoded_len(), self.encoded_size())
    }

    /// Replay the triples.
    pub fn decode(&self) -> Result<Vec<u8>> {
        decode(&self.triples)
    }

    /// Serialize into the binary container.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_size());
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Serialize into `out`, returning the number of bytes written.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut flags = 0;
        if matches!(self.triples.last(), Some(t) if t.next.is_none()) {
            flags |= FLAG_FINAL_WITHOUT_SYMBOL;
        }

        let mut header = [0u8; HEADER_SIZE];
        header[0..4].copy_from_slice(&MAGIC);
        header[4] = VERSION;
        header[5] = flags;
        header[8..16].copy_from_slice(&(self.decoded_len() as u64).to_le_bytes());
        header[16..24].copy_from_slice(&(self.triples.len() as u64).to_le_bytes());
        out.write_all(&header)?;

        for (index, triple) in self.triples.iter().enumerate() {
            let distance = u32::try_from(triple.distance).map_err(|_| {
                Error::malformed(index, triple.distance, triple.length, "distance too large")
            })?;
            let length = u16::try_from(triple.length).map_err(|_| {
                Error::malformed(index, triple.distance, triple.length, "length too large")
            })?;

            let mut record = [0u8; TRIPLE_SIZE];
            record[0..4].copy_from_slice(&distance.to_le_bytes());
            record[4..6].copy_from_slice(&length.to_le_bytes());
            record[6] = triple.next.unwrap_or(0);
            out.write_all(&record)?;
        }

        Ok(self.encoded_size())
    }

    /// Parse a binary container and check it decodes to the recorded length.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let (message, decoded_len) = Self::parse(input)?;
        message.decode_checked(decoded_len)?;
        Ok(message)
    }

    /// Parse a binary container and return the bytes it decodes to.
    pub fn decode_bytes(input: &[u8]) -> Result<Vec<u8>> {
        let (message, decoded_len) = Self::parse(input)?;
        message.decode_checked(decoded_len)
    }

    fn parse(input: &[u8]) -> Result<(Self, u64)> {
        if input.len() < HEADER_SIZE {
            return Err(Error::unexpected_eof(input.len()));
        }
        if input[0..4] != MAGIC {
            return Err(Error::corrupted_at("bad magic", 0));
        }
        if input[4] != VERSION {
            return Err(Error::Unsupported(format!("container version {}", input[4])));
        }
        let flags = input[5];
        if flags & !FLAG_FINAL_WITHOUT_SYMBOL != 0 {
            return Err(Error::corrupted_at("unknown flags", 5));
        }
        if read_u16_le(input, 6) != 0 {
            return Err(Error::corrupted_at("reserved bits set", 6));
        }
        let decoded_len = read_u64_le(input, 8);
        let count = read_u64_le(input, 16);

        let body = &input[HEADER_SIZE..];
        let expected = usize::try_from(count)
            .ok()
            .and_then(|c| c.checked_mul(TRIPLE_SIZE))
            .ok_or_else(|| Error::corrupted_at("triple count overflows", 16))?;
        if body.len() < expected {
            return Err(Error::unexpected_eof(input.len()));
        }
        if body.len() > expected {
            return Err(Error::corrupted_at("trailing data", HEADER_SIZE + expected));
        }

        let final_without_symbol = flags & FLAG_FINAL_WITHOUT_SYMBOL != 0;
        if final_without_symbol && count == 0 {
            return Err(Error::corrupted_at("final-triple flag on empty stream", 5));
        }

        let last = expected / TRIPLE_SIZE;
        let triples = body
            .chunks_exact(TRIPLE_SIZE)
            .enumerate()
            .map(|(index, chunk)| {
                let distance = read_u32_le(chunk, 0) as usize;
                let length = read_u16_le(chunk, 4) as usize;
                let next = if index + 1 == last && final_without_symbol {
                    None
                } else {
                    Some(chunk[6])
                };
                Triple::reference(distance, length, next)
            })
            .collect();

        Ok((Self::new(triples), decoded_len))
    }

    fn decode_checked(&self, decoded_len: u64) -> Result<Vec<u8>> {
        let decoded = self
            .decode()
            .map_err(|e| Error::corrupted_by("triple stream does not decode", e))?;
        if decoded.len() as u64 != decoded_len {
            return Err(Error::corrupted(format!(
                "decoded length {} does not match header {}",
                decoded.len(),
                decoded_len
            )));
        }
        Ok(decoded)
    }
}

impl From<Vec<Triple>> for CodedMessage {
    fn from(triples: Vec<Triple>) -> Self {
        Self::new(triples)
    }
}

#[inline(always)]
fn read_u16_le(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

#[inline(always)]
fn read_u32_le(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

#[inline(always)]
fn read_u64_le(data: &[u8], pos: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[pos..pos + 8]);
    u64::from_le_bytes(bytes)
}
