//! # Input Surface
//!
//! Turns keyboard keys, button names and textual key scripts into
//! [`Action`]s for the [`Calculator`](crate::Calculator).
//!
//! A key script is a compact way to type at the calculator from a terminal:
//!
//! - runs of ASCII letters are names (`sin`, `pi`, `Enter`, `clear`); a function
//!   name directly followed by `(` absorbs it, so `sin(30` and `sin30` mean
//!   the same thing;
//! - every other character is a single key (`7`, `+`, `×`, `π`, `=`);
//! - whitespace separates names and is otherwise ignored.
//!
//! # Example
//! ```rust
//! # use calcpad::{Action, parse_keys};
//! let actions = parse_keys("2 sin(30 =").unwrap();
//! assert_eq!(actions.len(), 5);
//! assert_eq!(actions[1], Action::input("sin(", "sin("));
//! assert_eq!(actions[4], Action::Evaluate);
//! ```
use crate::{CalcError, Category, classify};
use smartstring::alias::String;
use std::iter::Peekable;
use std::str::CharIndices;

/// Function buttons whose display and value are `name(`.
pub const FUNCTION_NAMES: &[&str] = &[
    "sin", "cos", "tan", "asin", "acos", "atan", "ln", "log", "abs", "exp",
];

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a token.
    Input {
        /// Text shown to the user.
        display: String,
        /// Fragment of the evaluable expression.
        value: String,
    },
    /// Empty the expression and reset the result.
    Clear,
    /// Remove the last token.
    Delete,
    /// Evaluate the expression.
    Evaluate,
}

impl Action {
    /// Shorthand for [`Action::Input`].
    pub fn input(display: &str, value: &str) -> Self {
        Action::Input {
            display: String::from(display),
            value: String::from(value),
        }
    }

    /// Maps a keyboard key name to its action.
    ///
    /// ```rust
    /// # use calcpad::Action;
    /// assert_eq!(Action::from_key("-"), Some(Action::input("−", "-")));
    /// assert_eq!(Action::from_key("Escape"), Some(Action::Clear));
    /// assert_eq!(Action::from_key("F1"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let action = match key {
            "." | "+" | "%" | "(" | ")" => Action::input(key, key),
            "-" => Action::input("−", "-"),
            "*" => Action::input("×", "*"),
            "/" => Action::input("÷", "/"),
            "Enter" | "=" => Action::Evaluate,
            "Backspace" => Action::Delete,
            "Delete" | "Escape" => Action::Clear,
            _ if key.len() == 1 && key.as_bytes()[0].is_ascii_digit() => Action::input(key, key),
            _ => return None,
        };
        Some(action)
    }

    /// Maps an on-screen button name to its action.
    ///
    /// Accepts every keyboard key plus the display glyphs, function names,
    /// constants and the control buttons.
    pub fn from_button(name: &str) -> Option<Self> {
        if let Some(action) = Self::from_key(name) {
            return Some(action);
        }
        let action = match name {
            "×" => Action::input("×", "*"),
            "÷" => Action::input("÷", "/"),
            "−" => Action::input("−", "-"),
            "π" | "pi" => Action::input("π", "pi"),
            "e" => Action::input("e", "e"),
            "√" | "sqrt" => Action::input("√(", "sqrt("),
            "clear" | "C" | "AC" => Action::Clear,
            "del" | "⌫" => Action::Delete,
            "equals" => Action::Evaluate,
            _ if FUNCTION_NAMES.contains(&name) => {
                let mut opener = String::from(name);
                opener.push('(');
                Action::Input {
                    display: opener.clone(),
                    value: opener,
                }
            }
            _ => return None,
        };
        Some(action)
    }

    /// Whether this action inputs a function opener such as `sin(`.
    fn opens_function(&self) -> bool {
        match self {
            Action::Input { display, value } => classify(display, value) == Category::FuncOpen,
            _ => false,
        }
    }
}

/// Splits a key script into actions.
///
/// # Errors
/// [`CalcError::UnknownKey`] for a name or character that maps to nothing.
pub fn parse_keys(script: &str) -> Result<Vec<Action>, CalcError> {
    let mut actions = Vec::new();
    let mut chars = script.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }

        let name = if ch.is_ascii_alphabetic() {
            let end = skip_letters(&mut chars, start + ch.len_utf8());
            &script[start..end]
        } else {
            &script[start..start + ch.len_utf8()]
        };

        let action = Action::from_button(name).ok_or_else(|| CalcError::UnknownKey {
            key: String::from(name),
        })?;
        if action.opens_function() {
            chars.next_if(|&(_, c)| c == '(');
        }
        log::trace!("key {name:?} -> {action:?}");
        actions.push(action);
    }
    Ok(actions)
}

/// Advances past a run of letters, returning the byte offset where it ends.
fn skip_letters(chars: &mut Peekable<CharIndices<'_>>, mut end: usize) -> usize {
    while let Some((i, c)) = chars.next_if(|&(_, c)| c.is_ascii_alphabetic()) {
        end = i + c.len_utf8();
    }
    end
}
