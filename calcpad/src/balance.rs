//! # Expression Finalizer
//!
//! Closes every parenthesis left open, so `sin(30` evaluates as `sin(30)`.
//! A stray `)` never drives the depth negative and is left for the evaluator
//! to reject.
use smartstring::alias::String;

/// Appends one `)` for each unclosed `(` in `expr`.
///
/// # Example
/// ```rust
/// # use calcpad::auto_balance;
/// assert_eq!(auto_balance("2*(3+sin(30").as_str(), "2*(3+sin(30))");
/// assert_eq!(auto_balance("(1))").as_str(), "(1))");
/// ```
pub fn auto_balance(expr: &str) -> String {
    let mut depth = 0usize;
    for ch in expr.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    let mut out = String::from(expr);
    for _ in 0..depth {
        out.push(')');
    }
    out
}
