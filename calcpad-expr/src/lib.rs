//! # calcpad-expr
//!
//! A small, closed-grammar arithmetic evaluator. It accepts conventional
//! infix arithmetic with `+ - * / %`, parentheses, named unary functions and
//! named constants, and nothing else: there is no way to reach arbitrary code
//! through an expression string.
//!
//! ## Overview
//!
//! - [`span`] — character-offset ranges ([`Span`]) attached to tokens and
//!   errors.
//! - [`token`] — [`ExprToken`], [`TokenID`] and [`TokenValue`].
//! - [`lexer`] — [`ExprLexer`], turning a string into tokens.
//! - [`builtins`] — the [`Builtins`] registry of functions and constants and
//!   the [`AngleMode`] used by trigonometric functions.
//! - [`parser`] — [`ExprParser`], a recursive-descent evaluator.
//! - [`evaluator`] — the [`Evaluate`] trait and its default implementation
//!   [`ExprEvaluator`].
//! - [`error`] — [`EvalError`].
//!
//! ## Example
//!
//! ```rust
//! use calcpad_expr::{Evaluate, EvalError, ExprEvaluator};
//!
//! let evaluator = ExprEvaluator::new();
//! assert_eq!(evaluator.evaluate("2*(3+4)").unwrap(), 14.0);
//! assert_eq!(evaluator.evaluate("sqrt(81) - abs(-2)").unwrap(), 7.0);
//! assert!(matches!(
//!     evaluator.evaluate("2 ** 3"),
//!     Err(EvalError::UnexpectedToken { .. })
//! ));
//! ```
pub mod builtins;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use builtins::{AngleMode, Builtin, Builtins, ParseAngleModeError, UnaryFn};
pub use error::EvalError;
pub use evaluator::{Evaluate, ExprEvaluator, evaluate};
pub use lexer::ExprLexer;
pub use parser::{ExprParser, MAX_DEPTH};
pub use span::Span;
pub use token::{ExprToken, TokenID, TokenValue};
