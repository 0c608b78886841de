//! # Expression Lexer
//!
//! [`ExprLexer`] turns an expression string into a stream of [`ExprToken`]s.
//! The accepted alphabet is deliberately small:
//!
//! - numerals: ASCII digits with at most one `.` (`12`, `0.5`, `.5`, `5.`),
//! - names: an ASCII letter followed by letters, digits or `_`,
//! - the operators `+ - * / %` and the parentheses `(` `)`,
//! - blanks, which are skipped.
//!
//! Anything else is an [`EvalError::UnexpectedChar`]. A numeral with more than
//! one decimal point is consumed whole and rejected as
//! [`EvalError::MalformedNumber`] rather than being split into two numbers.
//!
//! After the last token the lexer yields exactly one [`TokenID::End`] token
//! and then `None`.
//!
//! # Example
//! ```rust
//! # use calcpad_expr::{ExprLexer, TokenID};
//! let mut lexer = ExprLexer::new("2*sin(30)");
//! let ids: Vec<TokenID> = lexer
//!     .try_collect()
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.token_id)
//!     .collect();
//! assert_eq!(
//!     ids,
//!     [
//!         TokenID::Number,
//!         TokenID::Asterisk,
//!         TokenID::Ident,
//!         TokenID::LeftParen,
//!         TokenID::Number,
//!         TokenID::RightParen,
//!         TokenID::End,
//!     ]
//! );
//! ```
use crate::{EvalError, ExprToken, Span, TokenID, TokenValue};
use smartstring::alias::String;

/// A hand-written, single-pass lexer over an expression string.
#[derive(Debug, Clone)]
pub struct ExprLexer {
    chars: Vec<char>,
    pos: usize,
    end_flag: bool,
}

impl ExprLexer {
    /// Creates a lexer positioned at the start of `input`.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            end_flag: false,
        }
    }

    /// Returns the next token, or `None` once the `End` token has been
    /// delivered.
    pub fn try_next(&mut self) -> Result<Option<ExprToken>, EvalError> {
        if self.end_flag {
            return Ok(None);
        }

        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }

        let start = self.pos;
        let Some(ch) = self.peek() else {
            self.end_flag = true;
            return Ok(Some(ExprToken::punct(TokenID::End, Span::point(start))));
        };

        let token = match ch {
            '0'..='9' | '.' => self.number()?,
            c if c.is_ascii_alphabetic() => self.ident(),
            _ => {
                let token_id = match ch {
                    '+' => TokenID::Plus,
                    '-' => TokenID::Minus,
                    '*' => TokenID::Asterisk,
                    '/' => TokenID::Slash,
                    '%' => TokenID::Percent,
                    '(' => TokenID::LeftParen,
                    ')' => TokenID::RightParen,
                    _ => {
                        return Err(EvalError::UnexpectedChar {
                            ch,
                            span: Span::new(start, start + 1),
                        });
                    }
                };
                self.pos += 1;
                ExprToken::punct(token_id, Span::new(start, self.pos))
            }
        };

        log::trace!("lexed {:?} at {}", token.token_id, token.span);
        Ok(Some(token))
    }

    /// Drains the lexer, returning every token including the final `End`.
    pub fn try_collect(&mut self) -> Result<Vec<ExprToken>, EvalError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.try_next()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek().filter(|&c| pred(c)) {
            text.push(c);
            self.pos += 1;
        }
        text
    }

    fn number(&mut self) -> Result<ExprToken, EvalError> {
        let start = self.pos;
        let text = self.take_while(|c| c.is_ascii_digit() || c == '.');
        let span = Span::new(start, self.pos);

        let dots = text.chars().filter(|&c| c == '.').count();
        let value = if dots > 1 {
            None
        } else {
            text.as_str().parse::<f64>().ok()
        };

        match value {
            Some(n) => Ok(ExprToken {
                token_id: TokenID::Number,
                value: TokenValue::Number(n),
                span,
            }),
            None => Err(EvalError::MalformedNumber { text, span }),
        }
    }

    fn ident(&mut self) -> ExprToken {
        let start = self.pos;
        let name = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        ExprToken {
            token_id: TokenID::Ident,
            value: TokenValue::Ident(name),
            span: Span::new(start, self.pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn lexes_numbers_names_and_operators() {
        init();
        let mut lexer = ExprLexer::new(" 12.5 + pi ");
        assert_eq!(
            lexer.try_next().unwrap(),
            Some(ExprToken {
                token_id: TokenID::Number,
                value: TokenValue::Number(12.5),
                span: span!(1, 5),
            })
        );
        assert_eq!(
            lexer.try_next().unwrap(),
            Some(ExprToken::punct(TokenID::Plus, span!(6, 7)))
        );
        assert_eq!(
            lexer.try_next().unwrap(),
            Some(ExprToken {
                token_id: TokenID::Ident,
                value: TokenValue::Ident("pi".into()),
                span: span!(8, 10),
            })
        );
        assert_eq!(
            lexer.try_next().unwrap(),
            Some(ExprToken::punct(TokenID::End, span!(11, 11)))
        );
        assert_eq!(lexer.try_next().unwrap(), None);
        assert_eq!(lexer.try_next().unwrap(), None);
    }

    #[test]
    fn leading_and_trailing_dot_numerals_are_accepted() {
        init();
        let tokens = ExprLexer::new(".5+5.").try_collect().unwrap();
        assert_eq!(tokens[0].value, TokenValue::Number(0.5));
        assert_eq!(tokens[2].value, TokenValue::Number(5.0));
    }

    #[test]
    fn second_decimal_point_is_malformed() {
        init();
        let err = ExprLexer::new("1+1.2.3").try_collect().unwrap_err();
        assert_eq!(
            err,
            EvalError::MalformedNumber {
                text: "1.2.3".into(),
                span: span!(2, 7),
            }
        );
    }

    #[test]
    fn lone_dot_is_malformed() {
        init();
        let err = ExprLexer::new(".").try_collect().unwrap_err();
        assert!(matches!(err, EvalError::MalformedNumber { .. }));
    }

    #[test]
    fn foreign_glyph_is_rejected_with_char_offset() {
        init();
        let err = ExprLexer::new("2×π").try_collect().unwrap_err();
        assert_eq!(
            err,
            EvalError::UnexpectedChar {
                ch: '×',
                span: span!(1, 2),
            }
        );
    }

    #[test]
    fn empty_input_yields_only_end() {
        init();
        let tokens = ExprLexer::new("   ").try_collect().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_id, TokenID::End);
    }

    #[test]
    fn names_may_contain_digits_and_underscores() {
        init();
        let tokens = ExprLexer::new("log10_x(").try_collect().unwrap();
        assert_eq!(tokens[0].value, TokenValue::Ident("log10_x".into()));
        assert_eq!(tokens[1].token_id, TokenID::LeftParen);
    }
}
