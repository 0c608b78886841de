//! # Input Assembler
//!
//! Appends new input to the token sequence. Two decisions are made here:
//!
//! - **Numeral runs.** When both the last and the new token are digits or
//!   decimal points the new token is appended as is, so `1 2 . 5` builds the
//!   numeral `12.5`. A second decimal point is not rejected here; the
//!   evaluator fails the malformed numeral later.
//! - **Implicit multiplication.** When an operand-like token (digit, `)`,
//!   constant, `%`) is followed by an operand-opening token (`(`, function
//!   opener, constant, digit), a synthetic `×` is inserted first. This covers
//!   `)(`, `2π`, `π2`, `)2`, `2(`, `2sin(`, `%2` and `%(`.
//!
//! # Example
//! ```rust
//! # use calcpad::{Token, handle_input, join_values};
//! let mut tokens = Vec::new();
//! for (display, value) in [("2", "2"), ("(", "("), ("3", "3"), (")", ")"), ("π", "pi")] {
//!     handle_input(&mut tokens, display, value);
//! }
//! assert_eq!(join_values(&tokens).as_str(), "2*(3)*pi");
//! ```
use crate::{Category, Token, classify};

/// Whether a synthetic multiplication belongs between `last` and `new`.
pub fn needs_implicit_multiply(last: Option<Category>, new: Category) -> bool {
    let Some(last) = last else {
        return false;
    };
    let left = matches!(
        last,
        Category::Digit | Category::RParen | Category::Const | Category::Percent
    );
    let right = matches!(
        new,
        Category::LParen | Category::FuncOpen | Category::Const | Category::Digit
    );
    left && right && !(last == Category::Digit && new == Category::Digit)
}

/// Appends one input token, preceded by a synthetic `×` when implied.
///
/// Returns the number of tokens appended (1 or 2).
pub fn handle_input(tokens: &mut Vec<Token>, display: &str, value: &str) -> usize {
    let new = classify(display, value);
    let last = tokens.last().map(Token::category);

    if last.is_some_and(Category::is_number_part) && new.is_number_part() {
        tokens.push(Token::new(display, value));
        return 1;
    }

    let implied = needs_implicit_multiply(last, new);
    if implied {
        log::trace!("implicit multiply between {last:?} and {new:?}");
        tokens.push(Token::implicit_multiply());
    }
    tokens.push(Token::new(display, value));
    if implied { 2 } else { 1 }
}
