//! # Calculator Error Type
//!
//! This module defines [`CalcError`], a unified error enum for the calculator
//! pipeline. It aggregates failures from:
//!
//! - **Percent rewriting** (a `%` with nothing to apply to),
//! - **Evaluation** (the closed-grammar evaluator rejecting the string),
//! - **Result validation** (infinite or NaN results),
//! - **Key scripts** (names that map to no key).
//!
//! [`EvalError`] converts via `#[from]`, so `?` works at call sites. Inside
//! [`Calculator::evaluate`](crate::Calculator::evaluate) every variant
//! collapses into the `"Error"` display.
use calcpad_expr::EvalError;
use smartstring::alias::String;
use thiserror::Error;

/// Represents all possible errors that can occur within the calculator.
///
/// # Examples
/// ```rust
/// # use calcpad::CalcError;
/// # use calcpad_expr::evaluate;
/// let err: CalcError = evaluate("2+").unwrap_err().into();
/// assert!(matches!(err, CalcError::Evaluation(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A `%` token has no operand to its left.
    #[error("percent at token {index} has no operand")]
    PercentWithoutOperand {
        /// Position of the `%` token in the (partially rewritten) sequence.
        index: usize,
    },

    /// The evaluator rejected the expression string.
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvalError),

    /// The evaluator returned an infinity or NaN.
    #[error("non-finite result {0}")]
    NonFiniteResult(f64),

    /// A key script named a key that does not exist.
    #[error("unknown key {key:?}")]
    UnknownKey {
        /// The name as written.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcpad_expr::Span;

    #[test]
    fn eval_error_maps_to_calc_error() {
        let underlying = EvalError::UnexpectedChar {
            ch: '#',
            span: Span::new(0, 1),
        };
        let err: CalcError = underlying.clone().into();
        assert_eq!(err, CalcError::Evaluation(underlying));
        assert!(err.to_string().starts_with("evaluation error:"));
    }

    #[test]
    fn messages() {
        assert_eq!(
            CalcError::PercentWithoutOperand { index: 0 }.to_string(),
            "percent at token 0 has no operand"
        );
        assert_eq!(
            CalcError::NonFiniteResult(f64::INFINITY).to_string(),
            "non-finite result inf"
        );
        assert_eq!(
            CalcError::UnknownKey { key: "foo".into() }.to_string(),
            "unknown key \"foo\""
        );
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn calc_error_is_send_sync_static() {
        _assert_send_sync_static::<CalcError>();
    }
}
