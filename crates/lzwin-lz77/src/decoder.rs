//! Triple decoder.
//!
//! Decoding is a left-to-right fold: each triple copies from output that has
//! already been produced, then appends its guard symbol.

use lzwin_core::{Error, Result, WindowConfig, MAX_LOOKAHEAD_WINDOW_SIZE, MAX_WINDOW_SIZE};
use tracing::{debug, warn};

use crate::triple::Triple;

/// Replay `triples` into the symbol sequence they describe.
///
/// Without a [`WindowConfig`], distances and lengths are bounded by what the
/// binary container can represent.
pub fn decode<S: Copy>(triples: &[Triple<S>]) -> Result<Vec<S>> {
    decode_bounded(triples, None)
}

/// Like [`decode`], but also reject triples that `config` could not have produced.
pub fn decode_with_config<S: Copy>(
    triples: &[Triple<S>],
    config: &WindowConfig,
) -> Result<Vec<S>> {
    config.validate()?;
    decode_bounded(triples, Some(config))
}

fn decode_bounded<S: Copy>(
    triples: &[Triple<S>],
    config: Option<&WindowConfig>,
) -> Result<Vec<S>> {
    let mut output = Vec::with_capacity(triples.len());

    for (index, triple) in triples.iter().enumerate() {
        let is_last = index + 1 == triples.len();
        check_triple(index, triple, output.len(), is_last, config).inspect_err(|e| {
            warn!(error = %e, "rejected triple stream");
        })?;

        if triple.length > 0 {
            copy_match(&mut output, triple.distance, triple.length);
        }
        if let Some(symbol) = triple.next {
            output.push(symbol);
        }
    }

    debug!(triples = triples.len(), symbols = output.len(), "decoded");
    Ok(output)
}

fn check_triple<S>(
    index: usize,
    triple: &Triple<S>,
    cursor: usize,
    is_last: bool,
    config: Option<&WindowConfig>,
) -> Result<()> {
    let malformed = |reason| Err(Error::malformed(index, triple.distance, triple.length, reason));

    if triple.length > 0 && triple.distance == 0 {
        return malformed("back-reference with zero distance");
    }
    if triple.distance > cursor {
        return malformed("distance exceeds decoded output");
    }
    if triple.next.is_none() {
        if !is_last {
            return malformed("missing symbol before end of stream");
        }
        if triple.length == 0 {
            return malformed("triple produces no output");
        }
    }
    let (window_size, max_length) = match config {
        Some(config) => (config.window_size, config.max_match_length()),
        None => (MAX_WINDOW_SIZE, MAX_LOOKAHEAD_WINDOW_SIZE + 1),
    };
    if triple.distance > window_size {
        return malformed("distance exceeds history window");
    }
    if triple.length > max_length {
        return malformed("length exceeds lookahead window");
    }
    Ok(())
}

/// Append `length` symbols starting `distance` back from the end of `output`.
///
/// Source and destination overlap when `distance < length`; the copy then
/// repeats the last `distance` symbols, one chunk at a time.
fn copy_match<S: Copy>(output: &mut Vec<S>, distance: usize, length: usize) {
    let start = output.len() - distance;
    let mut remaining = length;
    while remaining > 0 {
        let n = remaining.min(output.len() - start);
        output.extend_from_within(start..start + n);
        remaining -= n;
    }
}
