//! Sliding-window longest-match search.
//!
//! The scan walks candidate starts from the cursor backward through the
//! history window. A single `cur_len` is carried across candidates: it only
//! grows when a candidate confirms a run of that length, and is never reset.
//! The result is the closest match found at each confirmed length, which is
//! not always the globally longest match in the window.

/// A match found by [`find_longest_match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Start index of the matched run. Equal to the cursor for a literal.
    pub start: usize,
    /// Length of the matched run (1 for a literal).
    pub length: usize,
}

impl Match {
    /// True when no earlier run beat the literal fallback at `position`.
    #[inline]
    pub fn is_literal_at(&self, position: usize) -> bool {
        self.start == position
    }
}

/// Compare `length` symbols starting at `a` and `b`.
#[inline]
pub fn runs_match<S: PartialEq>(symbols: &[S], a: usize, b: usize, length: usize) -> bool {
    symbols[a..a + length] == symbols[b..b + length]
}

/// Find the longest run before `position` that prefixes `symbols[position..]`.
///
/// Candidates lie in `[position - window_size, position)`, and a match never
/// reads past `position` in the history nor more than
/// `lookahead_window_size + 1` symbols ahead of it.
///
/// # Panics
/// Panics if `position >= symbols.len()`.
pub fn find_longest_match<S: PartialEq>(
    symbols: &[S],
    position: usize,
    window_size: usize,
    lookahead_window_size: usize,
) -> Match {
    assert!(position < symbols.len(), "match position out of range");

    let mut best = Match {
        start: position,
        length: 1,
    };
    if position == 0 {
        return best;
    }

    let start_of_window = position.saturating_sub(window_size);
    let end_of_lookahead = symbols
        .len()
        .min(position.saturating_add(lookahead_window_size).saturating_add(1));

    // Candidates are visited as `window_i = position - 1 ..= start_of_window`.
    let mut window_i = position;
    let mut cur_len = 1;

    while window_i > start_of_window {
        let candidate = window_i - 1;

        if candidate + cur_len > position {
            // Run would read symbols not yet emitted.
            window_i -= 1;
        } else if runs_match(symbols, candidate, position, cur_len) {
            best = Match {
                start: candidate,
                length: cur_len,
            };
            cur_len += 1;

            if position + cur_len > end_of_lookahead {
                break;
            }
        } else {
            window_i -= 1;
        }
    }

    best
}
