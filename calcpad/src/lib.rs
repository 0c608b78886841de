//! # calcpad
//!
//! The core of a keystroke calculator. Button presses and key strokes become
//! a sequence of [`Token`]s; evaluating that sequence applies calculator
//! percent semantics, closes any parentheses the user left open, runs the
//! closed-grammar evaluator from [`calcpad_expr`] and formats the result for
//! display.
//!
//! ## Overview
//!
//! - [`classify`] — the [`Category`] of a token, derived from its display
//!   and value text.
//! - [`token`] — [`Token`] and the joins that produce the expression display
//!   and the evaluable string.
//! - [`assemble`] — appending input, with numeral runs and implicit
//!   multiplication ([`handle_input`]).
//! - [`percent`] — rewriting `%` into plain arithmetic ([`rewrite_percent`]).
//! - [`balance`] — closing unclosed parentheses ([`auto_balance`]).
//! - [`format`] — the result display ([`format_result`]).
//! - [`calc`] — the [`Calculator`] controller that ties it all together.
//! - [`keys`] — keyboard keys, button names and key scripts as [`Action`]s.
//! - [`config`] — [`CalcConfig`].
//! - [`error`] — [`CalcError`].
//!
//! ## Example
//!
//! ```rust
//! use calcpad::{Calculator, parse_keys};
//!
//! let mut calc = Calculator::new();
//! calc.apply_all(&parse_keys("2(3+4)").unwrap());
//! assert_eq!(calc.expression_text(), "2×(3+4)");
//!
//! calc.apply_all(&parse_keys("=").unwrap());
//! assert_eq!(calc.result_text(), "14");
//!
//! calc.apply_all(&parse_keys("÷ 0 =").unwrap());
//! assert_eq!(calc.result_text(), "Error");
//! assert_eq!(calc.expression_text(), "14÷0");
//! ```
pub mod assemble;
pub mod balance;
pub mod calc;
pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod keys;
pub mod percent;
pub mod token;

pub use assemble::{handle_input, needs_implicit_multiply};
pub use balance::auto_balance;
pub use calc::Calculator;
pub use classify::{Category, classify};
pub use config::CalcConfig;
pub use error::CalcError;
pub use format::{ERROR_TEXT, format_result};
pub use keys::{Action, parse_keys};
pub use percent::{OperandRange, PercentOp, find_operand_range, rewrite_percent};
pub use token::{Token, display_text, join_display, join_values};
