//! # Token Classifier
//!
//! Maps a `(display, value)` pair to its semantic [`Category`]. The category
//! is never stored on a [`Token`](crate::Token); it is recomputed on demand,
//! so [`classify`] is a pure, total function.
//!
//! Rules are tried in priority order:
//!
//! | # | condition                                                   | category   |
//! |---|-------------------------------------------------------------|------------|
//! | 1 | `display` is a single ASCII digit                           | `Digit`    |
//! | 2 | `display == "."`                                            | `Dot`      |
//! | 3 | `display == "("` / `display == ")"`                         | `LParen` / `RParen` |
//! | 4 | `display == "%"` or `value == "%"`                          | `Percent`  |
//! | 5 | `value` ends with `(` and is not a bare paren               | `FuncOpen` |
//! | 6 | `display` is `π`/`e` or `value` is `pi`/`e`                 | `Const`    |
//! | 7 | `display` or `value` is an arithmetic operator glyph        | `Op`       |
//! | 8 | anything else                                               | `Other`    |
//!
//! Percent is checked before the generic operator rule because `%` is also an
//! operator glyph.
//!
//! # Example
//! ```rust
//! # use calcpad::{Category, classify};
//! assert_eq!(classify("7", "7"), Category::Digit);
//! assert_eq!(classify("√(", "sqrt("), Category::FuncOpen);
//! assert_eq!(classify("π", "pi"), Category::Const);
//! assert_eq!(classify("×", "*"), Category::Op);
//! assert_eq!(classify("%", "%"), Category::Percent);
//! assert_eq!(classify("250", "250"), Category::Other);
//! ```

/// Displays that denote a constant.
pub const CONST_DISPLAYS: &[&str] = &["π", "e"];

/// Values that denote a constant.
pub const CONST_VALUES: &[&str] = &["pi", "e"];

/// Display forms of the arithmetic operators, including the ASCII spellings.
pub const OP_DISPLAYS: &[&str] = &["+", "−", "×", "÷", "-", "*", "/", "%"];

/// Value forms of the arithmetic operators.
pub const OP_VALUES: &[&str] = &["+", "-", "*", "/", "%"];

/// The semantic category of an input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A single decimal digit.
    Digit,
    /// The decimal point.
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `%`
    Percent,
    /// A function opener such as `sin(`.
    FuncOpen,
    /// `π` or `e`.
    Const,
    /// A binary arithmetic operator.
    Op,
    /// Anything else, e.g. a previous result or a rewritten percent span.
    Other,
}

impl Category {
    /// Digits and the decimal point build numerals together.
    #[inline]
    pub fn is_number_part(self) -> bool {
        matches!(self, Category::Digit | Category::Dot)
    }
}

/// Classifies a token.
pub fn classify(display: &str, value: &str) -> Category {
    if display.len() == 1 && display.as_bytes()[0].is_ascii_digit() {
        return Category::Digit;
    }
    match display {
        "." => return Category::Dot,
        "(" => return Category::LParen,
        ")" => return Category::RParen,
        _ => {}
    }
    if display == "%" || value == "%" {
        return Category::Percent;
    }
    if value.ends_with('(') && value != "(" {
        return Category::FuncOpen;
    }
    if CONST_DISPLAYS.contains(&display) || CONST_VALUES.contains(&value) {
        return Category::Const;
    }
    if OP_DISPLAYS.contains(&display) || OP_VALUES.contains(&value) {
        return Category::Op;
    }
    Category::Other
}
