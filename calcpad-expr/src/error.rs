//! # Evaluator Error Type
//!
//! This module defines [`EvalError`], the single error surface of the
//! evaluator. Every variant carries the [`Span`] of the input it refers to,
//! so lexical failures (stray characters, malformed numerals) and syntactic
//! or name-resolution failures can all be reported against the source string.
use crate::{Span, TokenID};
use smartstring::alias::String;
use thiserror::Error;

/// Represents all possible errors raised while evaluating an expression.
///
/// # Example
/// ```rust
/// # use calcpad_expr::{EvalError, evaluate};
/// let err = evaluate("2 +* 3").unwrap_err();
/// assert!(matches!(err, EvalError::UnexpectedToken { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A character outside the grammar.
    #[error("unexpected character {ch:?} at {span}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Where it occurred.
        span: Span,
    },

    /// A numeral such as `1.2.3` or a lone `.`.
    #[error("malformed number {text:?} at {span}")]
    MalformedNumber {
        /// The literal text of the numeral.
        text: String,
        /// Where it occurred.
        span: Span,
    },

    /// A bare name that is not a registered constant.
    #[error("unknown identifier {name:?} at {span}")]
    UnknownIdentifier {
        /// The name as written.
        name: String,
        /// Where it occurred.
        span: Span,
    },

    /// A call `name(...)` where `name` is not a registered function.
    #[error("unknown function {name:?} at {span}")]
    UnknownFunction {
        /// The name as written.
        name: String,
        /// Where it occurred.
        span: Span,
    },

    /// A function name used without an argument list.
    #[error("function {name:?} requires an argument at {span}")]
    MissingArgument {
        /// The function name.
        name: String,
        /// Where it occurred.
        span: Span,
    },

    /// Parentheses, call arguments or unary signs nested too deeply.
    #[error("expression nested deeper than {limit} levels at {span}")]
    TooDeep {
        /// The nesting limit.
        limit: usize,
        /// Where the limit was exceeded.
        span: Span,
    },

    /// A token that does not fit the grammar at this point.
    #[error("expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// What it found instead.
        found: TokenID,
        /// Where it occurred.
        span: Span,
    },
}

impl EvalError {
    /// The span of the input this error refers to.
    pub fn span(&self) -> Span {
        match self {
            EvalError::UnexpectedChar { span, .. }
            | EvalError::MalformedNumber { span, .. }
            | EvalError::UnknownIdentifier { span, .. }
            | EvalError::UnknownFunction { span, .. }
            | EvalError::MissingArgument { span, .. }
            | EvalError::TooDeep { span, .. }
            | EvalError::UnexpectedToken { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span;

    #[test]
    fn display_mentions_name_and_span() {
        let err = EvalError::UnknownIdentifier {
            name: "foo".into(),
            span: span!(2, 5),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown identifier"));
        assert!(msg.contains("\"foo\""));
        assert!(msg.contains("2..5"));
    }

    #[test]
    fn span_accessor_covers_all_variants() {
        let err = EvalError::UnexpectedToken {
            expected: "')'",
            found: TokenID::End,
            span: span!(7, 7),
        };
        assert_eq!(err.span(), span!(7, 7));
        assert!(err.to_string().contains("end of expression"));
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn eval_error_is_send_sync_static() {
        _assert_send_sync_static::<EvalError>();
    }
}
