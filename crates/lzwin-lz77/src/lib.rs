//! # lzwin LZ77
//!
//! Sliding-window LZ77 coding with `(distance, length, next)` triples.
//!
//! The encoder walks the input once, asking the match finder for the longest
//! run in the history window that prefixes the lookahead window, and emits a
//! triple per step. The decoder replays triples against its own output, so a
//! back-reference may overlap the bytes it is producing.
//!
//! ## Example
//!
//! ```
//! use lzwin_core::WindowConfig;
//! use lzwin_lz77::{decode, encode, Triple};
//!
//! let triples = encode(b"ABABABAB", &WindowConfig::default()).unwrap();
//! assert_eq!(triples[2], Triple::reference(2, 2, Some(b'A')));
//! assert_eq!(decode(&triples).unwrap(), b"ABABABAB");
//! ```

pub mod codec;
pub mod compress;
pub mod decoder;
pub mod decompress;
pub mod encoder;
pub mod matcher;
pub mod message;
pub mod text;
pub mod triple;

// Re-export main types
pub use codec::Lz77Codec;
pub use compress::Lz77Compressor;
pub use decoder::{decode, decode_with_config};
pub use decompress::Lz77Decompressor;
pub use encoder::{encode, encode_default};
pub use matcher::{find_longest_match, Match};
pub use message::CodedMessage;
pub use text::{check_roundtrip_str, decode_to_string, encode_str};
pub use triple::Triple;
