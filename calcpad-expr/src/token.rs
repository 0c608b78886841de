//! # Expression Tokens
//!
//! This module defines the token kinds, payloads and the concrete token type
//! produced by [`ExprLexer`](crate::ExprLexer) and consumed by
//! [`ExprParser`](crate::ExprParser):
//!
//! - [`TokenID`]: the lexical category of a token,
//! - [`TokenValue`]: the payload a token carries (a number or a name),
//! - [`ExprToken`]: a token paired with its [`Span`] in the source string.
use crate::Span;
use smartstring::alias::String;
use std::fmt;

/// The lexical category of an [`ExprToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenID {
    /// A numeric literal such as `12` or `0.5`.
    Number,
    /// A name: a function (`sin`) or a constant (`pi`).
    Ident,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%` (remainder)
    Percent,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// End of input.
    End,
}

impl TokenID {
    /// Human readable description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenID::Number => "number",
            TokenID::Ident => "identifier",
            TokenID::Plus => "'+'",
            TokenID::Minus => "'-'",
            TokenID::Asterisk => "'*'",
            TokenID::Slash => "'/'",
            TokenID::Percent => "'%'",
            TokenID::LeftParen => "'('",
            TokenID::RightParen => "')'",
            TokenID::End => "end of expression",
        }
    }
}

impl fmt::Display for TokenID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The payload carried by an [`ExprToken`].
///
/// # Example
/// ```rust
/// # use calcpad_expr::TokenValue;
/// let value = TokenValue::Number(2.5);
/// let TokenValue::Number(n) = value else {
///     panic!("Expected a numeric token");
/// };
/// assert_eq!(n, 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// No associated data (operators and parentheses).
    None,

    /// Numeric literal value.
    Number(f64),

    /// Name of a function or constant.
    Ident(String),
}

/// A lexical token of the evaluator grammar.
///
/// # Example
/// ```rust
/// # use calcpad_expr::{ExprToken, TokenID, TokenValue, span};
/// let tok = ExprToken {
///     token_id: TokenID::Number,
///     value: TokenValue::Number(99.0),
///     span: span!(0, 2),
/// };
/// assert_eq!(tok.token_id, TokenID::Number);
/// assert_eq!(tok.span.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprToken {
    /// The token’s category.
    pub token_id: TokenID,
    /// The associated value for the token, if applicable.
    pub value: TokenValue,
    /// Where the token occurs in the source string.
    pub span: Span,
}

impl ExprToken {
    /// Creates a token with no payload.
    pub fn punct(token_id: TokenID, span: Span) -> Self {
        Self {
            token_id,
            value: TokenValue::None,
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span;

    #[test]
    fn punct_token_has_no_payload() {
        let t = ExprToken::punct(TokenID::Plus, span!(1, 2));
        assert_eq!(t.token_id, TokenID::Plus);
        assert!(matches!(t.value, TokenValue::None));
    }

    #[test]
    fn ident_value_stores_name() {
        let t = ExprToken {
            token_id: TokenID::Ident,
            value: TokenValue::Ident("sqrt".into()),
            span: span!(0, 4),
        };
        let TokenValue::Ident(name) = &t.value else {
            panic!("Expected TokenValue::Ident");
        };
        assert_eq!(name.as_str(), "sqrt");
    }

    #[test]
    fn describe_is_used_for_display() {
        assert_eq!(TokenID::RightParen.to_string(), "')'");
        assert_eq!(TokenID::End.to_string(), "end of expression");
    }
}
