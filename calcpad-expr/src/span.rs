//! Source ranges inside an expression string.
//!
//! Expressions handed to the evaluator are always a single line, so a
//! position is simply a 0-based character offset. [`Span`] marks the region a
//! token covers and is attached to every [`EvalError`](crate::EvalError) so a
//! caller can point at the offending part of the input.
//!
//! # Examples
//!
//! ```rust
//! # use calcpad_expr::{Span, span};
//! let sp = Span::new(3, 7);
//! assert!(!sp.is_empty());
//! assert_eq!(sp.len(), 4);
//! assert_eq!(sp.merge(&span!(0, 1)), span!(0, 7));
//! assert_eq!(sp.to_string(), "3..7");
//! ```

use std::fmt;

/// A half-open range of character offsets: `[start, end)`.
///
/// Invariants are not enforced here, but it is conventional for
/// `start <= end`.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Offset of the first character (inclusive).
    pub start: usize,
    /// Offset one past the last character (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span located at `offset`, used for end-of-input positions.
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Merge with another span by covering both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Is this span empty (start == end)?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Build a [`Span`] inline from start/end character offsets.
///
/// ```rust
/// # use calcpad_expr::span;
/// let s = span!(2, 5);
/// assert_eq!(s.len(), 3);
/// ```
#[macro_export]
macro_rules! span {
    ($start:expr, $end:expr) => {
        $crate::Span {
            start: $start,
            end: $end,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_covers_both_ends() {
        let a = Span::new(4, 6);
        let b = Span::new(1, 5);
        assert_eq!(a.merge(&b), Span::new(1, 6));
        assert_eq!(b.merge(&a), Span::new(1, 6));
    }

    #[test]
    fn merge_with_inner_span_is_noop() {
        let outer = span!(0, 10);
        assert_eq!(outer.merge(&span!(3, 4)), outer);
    }

    #[test]
    fn point_span_is_empty() {
        let p = Span::point(9);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.to_string(), "9..9");
    }

    #[test]
    fn reversed_span_has_zero_len() {
        assert_eq!(Span::new(5, 2).len(), 0);
    }
}
