//! # Calculator Tokens
//!
//! The token sequence is the whole state of an in-progress calculation. Each
//! [`Token`] pairs:
//!
//! - `display`: the exact text shown to the user (`×`, `−`, `π`, `sin(`),
//! - `value`: the fragment substituted into the evaluable string (`*`, `-`,
//!   `pi`, `sin(`).
//!
//! The evaluable string is the plain concatenation of every `value`, so each
//! value must be syntactically self-contained modulo its neighbours.
use crate::{Category, classify};
use smartstring::alias::String;

/// Shown for an empty expression.
pub const EMPTY_DISPLAY: &str = "0";

/// A single input token.
///
/// # Example
/// ```rust
/// # use calcpad::{Category, Token};
/// let tok = Token::new("×", "*");
/// assert_eq!(tok.category(), Category::Op);
/// assert_eq!(tok.value.as_str(), "*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Text rendered to the user.
    pub display: String,
    /// Fragment of the evaluable expression.
    pub value: String,
}

impl Token {
    /// Creates a token from its display and value text.
    pub fn new(display: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Self {
            display: String::from(display.as_ref()),
            value: String::from(value.as_ref()),
        }
    }

    /// The synthetic multiplication inserted between adjacent operands.
    pub fn implicit_multiply() -> Self {
        Self::new("×", "*")
    }

    /// The token's category, recomputed from `display` and `value`.
    #[inline]
    pub fn category(&self) -> Category {
        classify(&self.display, &self.value)
    }
}

/// Concatenation of every `display`.
pub fn join_display(tokens: &[Token]) -> String {
    let mut out = String::new();
    for t in tokens {
        out.push_str(&t.display);
    }
    out
}

/// Concatenation of every `value`: the evaluable string.
pub fn join_values(tokens: &[Token]) -> String {
    let mut out = String::new();
    for t in tokens {
        out.push_str(&t.value);
    }
    out
}

/// The expression display: [`join_display`], or `"0"` when empty.
pub fn display_text(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        String::from(EMPTY_DISPLAY)
    } else {
        join_display(tokens)
    }
}
