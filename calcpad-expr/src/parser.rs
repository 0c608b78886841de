//! # Expression Parser
//!
//! A recursive-descent parser that evaluates while it parses. It consumes the
//! tokens produced by [`ExprLexer`] and resolves names through a
//! [`Builtins`] registry. The grammar is closed: there is no way to reach
//! anything but arithmetic, the registered functions and the registered
//! constants.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | name '(' expr ')' | name | '(' expr ')'
//! ```
//!
//! ## Behavior highlights
//! - All binary operators are left-associative; `*`, `/` and `%` bind tighter
//!   than `+` and `-`.
//! - `%` is the floating-point remainder (sign of the left operand).
//! - Division by zero is not an error here: it produces an infinity or NaN and
//!   it is up to the caller to reject non-finite values.
//! - Input left over after a complete expression is an
//!   [`EvalError::UnexpectedToken`].
//! - Parentheses, call arguments and unary signs may nest at most
//!   [`MAX_DEPTH`] levels; deeper input is an [`EvalError::TooDeep`].
//!
//! # Example
//! ```rust
//! # use calcpad_expr::{Builtins, ExprParser};
//! let builtins = Builtins::new();
//! let mut parser = ExprParser::try_new("2*(3+4) - -1", &builtins).unwrap();
//! assert_eq!(parser.parse().unwrap(), 15.0);
//! ```
use crate::{Builtin, Builtins, EvalError, ExprLexer, ExprToken, Span, TokenID, TokenValue};
use smartstring::alias::String;

/// Deepest nesting of parentheses, call arguments and unary signs.
pub const MAX_DEPTH: usize = 256;

/// Parses and evaluates one expression.
pub struct ExprParser<'b> {
    /// All tokens of the input; always terminated by an `End` token.
    tokens: Vec<ExprToken>,
    pos: usize,
    depth: usize,
    builtins: &'b Builtins,
}

impl<'b> ExprParser<'b> {
    /// Lexes `input` up front.
    ///
    /// # Errors
    /// Returns the first lexical error ([`EvalError::UnexpectedChar`] or
    /// [`EvalError::MalformedNumber`]).
    pub fn try_new(input: &str, builtins: &'b Builtins) -> Result<Self, EvalError> {
        let tokens = ExprLexer::new(input).try_collect()?;
        Ok(Self {
            tokens,
            pos: 0,
            depth: 0,
            builtins,
        })
    }

    /// Evaluates the whole input.
    pub fn parse(&mut self) -> Result<f64, EvalError> {
        let value = self.expr()?;
        let tok = self.peek();
        if tok.token_id != TokenID::End {
            return Err(unexpected("operator or end of expression", tok));
        }
        Ok(value)
    }

    #[inline]
    fn peek(&self) -> &ExprToken {
        &self.tokens[self.pos]
    }

    /// Takes the current token. The trailing `End` token is never consumed.
    fn bump(&mut self) -> ExprToken {
        let tok = self.tokens[self.pos].clone();
        if tok.token_id != TokenID::End {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, token_id: TokenID) -> Result<ExprToken, EvalError> {
        if self.peek().token_id == token_id {
            Ok(self.bump())
        } else {
            Err(unexpected(token_id.describe(), self.peek()))
        }
    }

    /// Runs `f` one nesting level deeper.
    fn nested(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<f64, EvalError>,
    ) -> Result<f64, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep {
                limit: MAX_DEPTH,
                span: self.peek().span,
            });
        }
        self.depth += 1;
        let value = f(self);
        self.depth -= 1;
        value
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.term()?;
        loop {
            match self.peek().token_id {
                TokenID::Plus => {
                    self.bump();
                    acc += self.term()?;
                }
                TokenID::Minus => {
                    self.bump();
                    acc -= self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.unary()?;
        loop {
            match self.peek().token_id {
                TokenID::Asterisk => {
                    self.bump();
                    acc *= self.unary()?;
                }
                TokenID::Slash => {
                    self.bump();
                    acc /= self.unary()?;
                }
                TokenID::Percent => {
                    self.bump();
                    acc %= self.unary()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        match self.peek().token_id {
            TokenID::Plus => {
                self.bump();
                self.nested(Self::unary)
            }
            TokenID::Minus => {
                self.bump();
                Ok(-self.nested(Self::unary)?)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        let ExprToken {
            token_id,
            value,
            span,
        } = self.bump();
        match (token_id, value) {
            (_, TokenValue::Number(n)) => Ok(n),
            (_, TokenValue::Ident(name)) => self.name(name, span),
            (TokenID::LeftParen, _) => {
                let value = self.nested(Self::expr)?;
                self.expect(TokenID::RightParen)?;
                Ok(value)
            }
            (found, _) => Err(EvalError::UnexpectedToken {
                expected: "operand",
                found,
                span,
            }),
        }
    }

    /// A function call or a constant reference.
    fn name(&mut self, name: String, span: Span) -> Result<f64, EvalError> {
        if self.peek().token_id == TokenID::LeftParen {
            let open = self.bump();
            let Some(Builtin::Function(f)) = self.builtins.get(&name) else {
                return Err(EvalError::UnknownFunction {
                    name,
                    span: span.merge(&open.span),
                });
            };
            let arg = self.nested(Self::expr)?;
            self.expect(TokenID::RightParen)?;
            let value = f(arg, self.builtins.angle_mode());
            log::trace!("{name}({arg}) = {value}");
            return Ok(value);
        }

        match self.builtins.get(&name) {
            Some(Builtin::Constant(value)) => Ok(value),
            Some(Builtin::Function(_)) => Err(EvalError::MissingArgument { name, span }),
            None => Err(EvalError::UnknownIdentifier { name, span }),
        }
    }
}

fn unexpected(expected: &'static str, found: &ExprToken) -> EvalError {
    EvalError::UnexpectedToken {
        expected,
        found: found.token_id,
        span: found.span,
    }
}
