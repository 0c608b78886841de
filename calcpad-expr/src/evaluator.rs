//! The evaluation seam.
//!
//! [`Evaluate`] is the contract the calculator relies on: take a string in
//! the closed infix grammar and return a number or an [`EvalError`].
//! [`ExprEvaluator`] is the implementation backed by [`ExprParser`]; anything
//! else satisfying the trait can be substituted.

use crate::{Builtins, EvalError, ExprParser};

/// Evaluates an arithmetic expression string.
pub trait Evaluate {
    /// Returns the numeric value of `expr`.
    ///
    /// Non-finite results (for example from a division by zero) are returned
    /// as `Ok`; rejecting them is the caller's policy.
    fn evaluate(&self, expr: &str) -> Result<f64, EvalError>;
}

/// The default evaluator: a recursive-descent parser over a [`Builtins`]
/// registry.
///
/// # Example
/// ```rust
/// # use calcpad_expr::{Evaluate, ExprEvaluator};
/// let evaluator = ExprEvaluator::new();
/// assert_eq!(evaluator.evaluate("sqrt(9)*2").unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExprEvaluator {
    builtins: Builtins,
}

impl ExprEvaluator {
    /// Creates an evaluator with the default registry (degree mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator over a custom registry.
    pub fn with_builtins(builtins: Builtins) -> Self {
        Self { builtins }
    }

    /// The registry used to resolve names.
    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    /// Mutable access to the registry, e.g. to switch the angle mode.
    pub fn builtins_mut(&mut self) -> &mut Builtins {
        &mut self.builtins
    }
}

impl Evaluate for ExprEvaluator {
    fn evaluate(&self, expr: &str) -> Result<f64, EvalError> {
        let value = ExprParser::try_new(expr, &self.builtins)?.parse()?;
        log::debug!("evaluated {expr:?} = {value}");
        Ok(value)
    }
}

/// Evaluates `expr` with a default [`ExprEvaluator`].
///
/// ```rust
/// # use calcpad_expr::evaluate;
/// assert_eq!(evaluate("(1+2)*3").unwrap(), 9.0);
/// ```
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    ExprEvaluator::new().evaluate(expr)
}
