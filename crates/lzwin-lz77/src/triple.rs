//! The `(distance, length, next)` triple exchanged between encoder and decoder.

use std::fmt;

/// One coding step: copy `length` symbols from `distance` back, then append `next`.
///
/// A literal is `(0, 0, Some(symbol))`. `next` is `None` only on the final
/// triple of a stream, when the match runs to the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triple<S = u8> {
    /// How far back the copied run starts (0 for a literal).
    pub distance: usize,
    /// Number of symbols copied.
    pub length: usize,
    /// Symbol following the copied run.
    pub next: Option<S>,
}

impl<S> Triple<S> {
    /// A literal with no back-reference.
    pub fn literal(symbol: S) -> Self {
        Self {
            distance: 0,
            length: 0,
            next: Some(symbol),
        }
    }

    /// A back-reference followed by an optional guard symbol.
    pub fn reference(distance: usize, length: usize, next: Option<S>) -> Self {
        Self {
            distance,
            length,
            next,
        }
    }

    /// True when the triple carries no back-reference.
    pub fn is_literal(&self) -> bool {
        self.length == 0
    }

    /// Number of symbols this triple produces when replayed.
    pub fn decoded_len(&self) -> usize {
        self.length + usize::from(self.next.is_some())
    }
}

impl<S: fmt::Display> fmt::Display for Triple<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.next {
            Some(symbol) => write!(f, "({},{},{})", self.distance, self.length, symbol),
            None => write!(f, "({},{},-)", self.distance, self.length),
        }
    }
}
