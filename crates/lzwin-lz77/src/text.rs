//! Text wrappers over the byte coder.
//!
//! Each `char` maps to the byte with the same code point, so only text in
//! the Latin-1 range (U+0000..=U+00FF) can be encoded.

use lzwin_core::{Error, Result, WindowConfig};

use crate::decoder::decode;
use crate::encoder::encode;
use crate::triple::Triple;

/// Map each `char` of `text` to a byte, rejecting code points above 255.
pub fn text_to_symbols(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, c)| u8::try_from(c).map_err(|_| Error::invalid_input(index, c as u32)))
        .collect()
}

/// Map bytes back to the `char`s with the same code points.
pub fn symbols_to_text(symbols: &[u8]) -> String {
    symbols.iter().map(|&b| char::from(b)).collect()
}

/// Encode Latin-1 text into byte triples.
pub fn encode_str(text: &str, config: &WindowConfig) -> Result<Vec<Triple>> {
    let symbols = text_to_symbols(text)?;
    encode(&symbols, config)
}

/// Decode byte triples into text.
pub fn decode_to_string(triples: &[Triple]) -> Result<String> {
    Ok(symbols_to_text(&decode(triples)?))
}

/// Encode then decode `text` with default windows and report whether it survived.
pub fn check_roundtrip_str(text: &str) -> Result<bool> {
    let triples = encode_str(text, &WindowConfig::default())?;
    Ok(decode_to_string(&triples)? == text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_ascii() {
        let text = "peter piper picked a peck of pickled peppers";
        let triples = encode_str(text, &WindowConfig::default()).unwrap();
        assert!(triples.len() < text.len());
        assert_eq!(decode_to_string(&triples).unwrap(), text);
    }

    #[test]
    fn test_roundtrip_latin1() {
        assert!(check_roundtrip_str("café crème brûlée, café crème").unwrap());
        assert!(check_roundtrip_str("").unwrap());
    }

    #[test]
    fn test_code_point_index_is_char_index() {
        // 'é' takes two UTF-8 bytes but one position.
        match text_to_symbols("é☺").unwrap_err() {
            Error::InvalidInput { index, code_point } => {
                assert_eq!(index, 1);
                assert_eq!(code_point, 0x263A);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_range_rejected_before_encoding() {
        assert!(matches!(
            encode_str("abc\u{100}", &WindowConfig::default()),
            Err(Error::InvalidInput { index: 3, .. })
        ));
    }

    #[test]
    fn test_symbols_to_text_is_latin1() {
        assert_eq!(symbols_to_text(&[0x41, 0xE9, 0xFF]), "Aéÿ");
    }
}
