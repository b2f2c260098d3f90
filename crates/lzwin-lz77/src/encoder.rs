//! Greedy single-pass triple encoder.

use lzwin_core::{Result, WindowConfig};
use tracing::{debug, trace};

use crate::matcher::find_longest_match;
use crate::triple::Triple;

/// Encode `symbols` into triples.
///
/// Each step asks the match finder for the longest run at the cursor. A
/// literal fallback emits `(0, 0, symbol)` and advances by one; a match emits
/// `(distance, length, next)` and advances past the run and its guard symbol.
/// The final triple has `next == None` when its run reaches the end of input.
pub fn encode<S: Copy + PartialEq>(
    symbols: &[S],
    config: &WindowConfig,
) -> Result<Vec<Triple<S>>> {
    config.validate()?;

    let mut triples = Vec::new();
    let mut i = 0;

    while i < symbols.len() {
        let found = find_longest_match(
            symbols,
            i,
            config.window_size,
            config.lookahead_window_size,
        );

        let triple = if found.is_literal_at(i) {
            Triple::literal(symbols[i])
        } else {
            let next = symbols.get(i + found.length).copied();
            Triple::reference(i - found.start, found.length, next)
        };

        trace!(position = i, distance = triple.distance, length = triple.length, "emit");
        i += triple.length + 1;
        triples.push(triple);
    }

    debug!(
        symbols = symbols.len(),
        triples = triples.len(),
        window = config.window_size,
        lookahead = config.lookahead_window_size,
        "encoded"
    );

    Ok(triples)
}

/// Encode with the default 65535-symbol window and 255-symbol lookahead.
pub fn encode_default<S: Copy + PartialEq>(symbols: &[S]) -> Result<Vec<Triple<S>>> {
    encode(symbols, &WindowConfig::default())
}
