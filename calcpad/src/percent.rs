//! # Percent Rewriter
//!
//! Eliminates every `%` token by rewriting it, together with its operands,
//! into plain arithmetic the evaluator understands. Calculator percent
//! semantics apply:
//!
//! | input        | rewrite                        | example          |
//! |--------------|--------------------------------|------------------|
//! | `B %`        | `((B)/100)`                    | `10%` → 0.1      |
//! | `A + B %`    | `((A)+((A)*((B)/100)))`        | `200+25%` → 250  |
//! | `A − B %`    | `((A)-((A)*((B)/100)))`        | `200−25%` → 150  |
//! | `A × B %`    | `((A)*((B)/100))`              | `50×10%` → 5     |
//! | `A ÷ B %`    | `((A)/((B)/100))`              | `200÷25%` → 800  |
//!
//! `A` and `B` are operand ranges found by [`find_operand_range`]: a numeral,
//! a constant, a parenthesised group or a function call. The operator is the
//! nearest one before `B`, so in `5 + (10%` it is `+`. `A` is the operand
//! directly left of that operator, so in `A + B − C%` the percentage is taken
//! of `B`.
//!
//! The scan runs left to right. Each rewritten span is spliced into a single
//! synthetic token and the scan continues after it, so rewritten text is not
//! scanned again.
//!
//! # Example
//! ```rust
//! # use calcpad::{Token, rewrite_percent};
//! let tokens: Vec<Token> = ["2", "0", "0", "+", "2", "5", "%"]
//!     .iter()
//!     .map(|s| Token::new(s, s))
//!     .collect();
//! assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "((200)+((200)*((25)/100)))");
//! ```
use crate::{CalcError, Category, Token, join_display, join_values};
use smartstring::alias::String;

/// An inclusive range of token indices forming one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandRange {
    /// First token of the operand.
    pub start: usize,
    /// Last token of the operand (inclusive).
    pub end: usize,
}

impl OperandRange {
    /// The evaluable text of the operand.
    pub fn value_text(&self, tokens: &[Token]) -> String {
        join_values(&tokens[self.start..=self.end])
    }
}

/// The binary operators a percent can be applied against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl PercentOp {
    /// Recognizes an operator token by value (`+ - * /`) or display
    /// (`+ − × ÷`).
    pub fn from_token(token: &Token) -> Option<Self> {
        match (token.value.as_str(), token.display.as_str()) {
            ("+", _) | (_, "+") => Some(PercentOp::Add),
            ("-", _) | (_, "−") => Some(PercentOp::Sub),
            ("*", _) | (_, "×") => Some(PercentOp::Mul),
            ("/", _) | (_, "÷") => Some(PercentOp::Div),
            _ => None,
        }
    }

    /// Builds the rewrite of `a <op> b%`.
    pub fn apply(self, a: &str, b: &str) -> String {
        let text = match self {
            PercentOp::Add => format!("(({a})+(({a})*(({b})/100)))"),
            PercentOp::Sub => format!("(({a})-(({a})*(({b})/100)))"),
            PercentOp::Mul => format!("(({a})*(({b})/100))"),
            PercentOp::Div => format!("(({a})/(({b})/100))"),
        };
        String::from(text)
    }
}

/// Builds the rewrite of a standalone `b%`.
pub fn standalone(b: &str) -> String {
    String::from(format!("(({b})/100)"))
}

/// Finds the operand that ends at token `end`.
///
/// - `)` — walks back to the matching opener (a bare `(` or a function
///   opener). A bare `(` directly preceded by a function opener is included
///   with it.
/// - constant — that token alone.
/// - digit or `.` — the whole numeral.
/// - `%` — the operand below it (`end - 1`).
/// - anything else (a previous result, an already rewritten percent, and
///   degenerate cases such as `(` or an operator) — that token alone.
///
/// Returns `None` when `end` is out of range or a `)` is unmatched.
pub fn find_operand_range(tokens: &[Token], mut end: usize) -> Option<OperandRange> {
    while tokens.get(end)?.category() == Category::Percent {
        end = end.checked_sub(1)?;
    }
    match tokens[end].category() {
        Category::RParen => {
            let mut depth = 0usize;
            for j in (0..=end).rev() {
                match tokens[j].category() {
                    Category::RParen => depth += 1,
                    c @ (Category::LParen | Category::FuncOpen) => {
                        depth -= 1;
                        if depth == 0 {
                            let start = if c == Category::LParen
                                && j > 0
                                && tokens[j - 1].category() == Category::FuncOpen
                            {
                                j - 1
                            } else {
                                j
                            };
                            return Some(OperandRange { start, end });
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        Category::Digit | Category::Dot => {
            let mut start = end;
            while start > 0 && tokens[start - 1].category().is_number_part() {
                start -= 1;
            }
            Some(OperandRange { start, end })
        }
        _ => Some(OperandRange { start: end, end }),
    }
}

/// Rewrites every `%` in `tokens` and returns the evaluable string.
///
/// # Errors
/// [`CalcError::PercentWithoutOperand`] when a `%` is the first token or
/// follows an unmatched `)`.
pub fn rewrite_percent(tokens: &[Token]) -> Result<String, CalcError> {
    let mut tokens = tokens.to_vec();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].category() != Category::Percent {
            i += 1;
            continue;
        }

        let b = i
            .checked_sub(1)
            .and_then(|end| find_operand_range(&tokens, end))
            .ok_or(CalcError::PercentWithoutOperand { index: i })?;
        let b_text = b.value_text(&tokens);

        let left = nearest_operator(&tokens[..b.start]).and_then(|op_index| {
            let op = PercentOp::from_token(&tokens[op_index])?;
            let a = find_operand_range(&tokens, op_index.checked_sub(1)?)?;
            Some((a, op))
        });

        let (start, value) = match left {
            Some((a, op)) => (a.start, op.apply(&a.value_text(&tokens), &b_text)),
            None => (b.start, standalone(&b_text)),
        };

        let display = join_display(&tokens[start..=i]);
        log::trace!("percent {display:?} rewritten as {value:?}");
        tokens.splice(start..=i, [Token { display, value }]);
        i = start + 1;
    }
    Ok(join_values(&tokens))
}

/// Index of the last operator token in `tokens`.
fn nearest_operator(tokens: &[Token]) -> Option<usize> {
    tokens.iter().rposition(|t| t.category() == Category::Op)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn toks(items: &[(&str, &str)]) -> Vec<Token> {
        items.iter().map(|(d, v)| Token::new(d, v)).collect()
    }

    fn plain(items: &[&str]) -> Vec<Token> {
        items.iter().map(|s| Token::new(s, s)).collect()
    }

    #[test]
    fn without_percent_values_are_joined() {
        init();
        let tokens = toks(&[("2", "2"), ("×", "*"), ("π", "pi")]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "2*pi");
    }

    #[test]
    fn standalone_percent() {
        init();
        assert_eq!(rewrite_percent(&plain(&["1", "0", "%"])).unwrap().as_str(), "((10)/100)");
    }

    #[test]
    fn additive_and_subtractive_percent_are_relative_to_a() {
        init();
        assert_eq!(
            rewrite_percent(&plain(&["2", "0", "0", "+", "2", "5", "%"])).unwrap().as_str(),
            "((200)+((200)*((25)/100)))"
        );
        let tokens = toks(&[
            ("2", "2"),
            ("0", "0"),
            ("0", "0"),
            ("−", "-"),
            ("2", "2"),
            ("5", "5"),
            ("%", "%"),
        ]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "((200)-((200)*((25)/100)))"
        );
    }

    #[test]
    fn multiplicative_and_division_percent() {
        init();
        let tokens = toks(&[("5", "5"), ("0", "0"), ("×", "*"), ("1", "1"), ("0", "0"), ("%", "%")]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "((50)*((10)/100))");
        let tokens = toks(&[("2", "2"), ("0", "0"), ("0", "0"), ("÷", "/"), ("2", "2"), ("5", "5"), ("%", "%")]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "((200)/((25)/100))");
    }

    #[test]
    fn operator_recognized_by_display_only() {
        init();
        let tokens = toks(&[("8", "8"), ("×", "mul"), ("5", "5"), ("%", "%")]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "((8)*((5)/100))");
    }

    #[test]
    fn rewrite_keeps_surrounding_tokens() {
        init();
        let tokens = plain(&["3", "*", "(", "2", "0", "0", "+", "1", "0", "%", ")"]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "3*(((200)+((200)*((10)/100))))"
        );
    }

    #[test]
    fn chained_operators_use_the_nearest_left_operand() {
        init();
        let tokens = plain(&["1", "0", "+", "2", "0", "-", "5", "0", "%"]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "10+((20)-((20)*((50)/100)))"
        );
    }

    #[test]
    fn parenthesized_and_function_operands() {
        init();
        let tokens = plain(&["(", "1", "+", "1", ")", "%"]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "(((1+1))/100)");

        let tokens = toks(&[
            ("1", "1"),
            ("0", "0"),
            ("×", "*"),
            ("√(", "sqrt("),
            ("4", "4"),
            (")", ")"),
            ("%", "%"),
        ]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "((10)*((sqrt(4))/100))"
        );
    }

    #[test]
    fn constant_operand() {
        init();
        let tokens = toks(&[("1", "1"), ("0", "0"), ("+", "+"), ("π", "pi"), ("%", "%")]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "((10)+((10)*((pi)/100)))"
        );
    }

    #[test]
    fn previous_result_is_a_single_operand() {
        init();
        let tokens = toks(&[("250", "250"), ("×", "*"), ("1", "1"), ("0", "0"), ("%", "%")]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "((250)*((10)/100))");
    }

    #[test]
    fn operator_search_skips_openers() {
        init();
        let tokens = plain(&["5", "+", "(", "1", "0", "%"]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "((5)+((5)*((10)/100)))"
        );

        let tokens = plain(&["1", "0", "0", "+", "sin(", "3", "0", "%"]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "((100)+((100)*((30)/100)))"
        );
    }

    #[test]
    fn open_paren_is_a_degenerate_operand() {
        init();
        let tokens = plain(&["(", "+", "5", "%"]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "((()+((()*((5)/100)))"
        );
    }

    #[test]
    fn operator_is_a_degenerate_operand() {
        init();
        let tokens = plain(&["5", "+", "%"]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "5((+)/100)");
    }

    #[test]
    fn leading_minus_falls_back_to_standalone() {
        init();
        let tokens = toks(&[("−", "-"), ("5", "5"), ("%", "%")]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "-((5)/100)");
    }

    #[test]
    fn repeated_percent_applies_twice() {
        init();
        let tokens = plain(&["5", "0", "%", "%"]);
        assert_eq!(rewrite_percent(&tokens).unwrap().as_str(), "((((50)/100))/100)");
    }

    #[test]
    fn two_independent_percents() {
        init();
        let tokens = plain(&["1", "0", "%", "+", "2", "0", "%"]);
        assert_eq!(
            rewrite_percent(&tokens).unwrap().as_str(),
            "((((10)/100))+((((10)/100))*((20)/100)))"
        );
    }

    #[test]
    fn percent_without_operand_fails() {
        init();
        assert_eq!(
            rewrite_percent(&plain(&["%"])).unwrap_err(),
            CalcError::PercentWithoutOperand { index: 0 }
        );
        assert_eq!(
            rewrite_percent(&plain(&["3", ")", "%"])).unwrap_err(),
            CalcError::PercentWithoutOperand { index: 2 }
        );
    }

    #[test]
    fn operand_ranges() {
        let tokens = toks(&[
            ("2", "2"),
            ("+", "+"),
            ("sin(", "sin("),
            ("(", "("),
            ("3", "3"),
            ("0", "0"),
            (")", ")"),
            (")", ")"),
            ("1", "1"),
            (".", "."),
            ("5", "5"),
        ]);
        assert_eq!(
            find_operand_range(&tokens, 10),
            Some(OperandRange { start: 8, end: 10 })
        );
        assert_eq!(
            find_operand_range(&tokens, 7),
            Some(OperandRange { start: 2, end: 7 })
        );
        assert_eq!(
            find_operand_range(&tokens, 6),
            Some(OperandRange { start: 2, end: 6 })
        );
        assert_eq!(
            find_operand_range(&tokens, 0),
            Some(OperandRange { start: 0, end: 0 })
        );
        assert_eq!(
            find_operand_range(&tokens, 1),
            Some(OperandRange { start: 1, end: 1 })
        );
        assert_eq!(
            find_operand_range(&tokens, 2),
            Some(OperandRange { start: 2, end: 2 })
        );
        assert_eq!(find_operand_range(&tokens, 11), None);
    }

    #[test]
    fn unmatched_close_paren_has_no_operand() {
        let tokens = plain(&["3", ")"]);
        assert_eq!(find_operand_range(&tokens, 1), None);
    }

    #[test]
    fn percent_operand_skips_to_the_operand_below() {
        let tokens = plain(&["4", "2", "%"]);
        assert_eq!(
            find_operand_range(&tokens, 2),
            Some(OperandRange { start: 0, end: 1 })
        );
    }
}
