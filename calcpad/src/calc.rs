//! # Calculator Controller
//!
//! [`Calculator`] owns the whole state of one calculator: the token
//! sequence, the expression display and the result display. Every user
//! action is a method call that runs to completion.
//!
//! Evaluation runs the pipeline
//!
//! ```text
//! tokens ─▶ rewrite_percent ─▶ auto_balance ─▶ Evaluate::evaluate ─▶ format_result
//! ```
//!
//! and is the failure boundary: any [`CalcError`] along the way, or a
//! non-finite result, turns the result display into `"Error"` and leaves the
//! tokens untouched so the user can fix the input. On success the tokens
//! collapse into a single token holding the result.
use crate::{
    Action, CalcConfig, CalcError, Category, ERROR_TEXT, Token, assemble, auto_balance, classify,
    display_text, format_result, rewrite_percent,
};
use calcpad_expr::{Builtins, Evaluate, ExprEvaluator};
use smartstring::alias::String;

/// Result display before anything has been evaluated.
const INITIAL_RESULT: &str = "0";

/// A calculator instance.
///
/// # Example
/// ```rust
/// # use calcpad::Calculator;
/// let mut calc = Calculator::new();
/// for key in ["2", "0", "0", "+", "2", "5"] {
///     calc.handle_input(key, key);
/// }
/// calc.handle_input("%", "%");
/// assert_eq!(calc.result_text(), "250");
/// assert_eq!(calc.expression_text(), "250");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator<E = ExprEvaluator> {
    tokens: Vec<Token>,
    expression: String,
    result: String,
    config: CalcConfig,
    evaluator: E,
}

impl Calculator<ExprEvaluator> {
    /// Creates a calculator with the default settings.
    pub fn new() -> Self {
        Self::with_config(CalcConfig::default())
    }

    /// Creates a calculator backed by the built-in evaluator, with the
    /// builtins set up for `config`.
    pub fn with_config(config: CalcConfig) -> Self {
        let builtins = Builtins::with_angle_mode(config.angle_mode);
        Self::with_evaluator(ExprEvaluator::with_builtins(builtins), config)
    }
}

impl Default for Calculator<ExprEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluate> Calculator<E> {
    /// Creates a calculator over any evaluator.
    pub fn with_evaluator(evaluator: E, config: CalcConfig) -> Self {
        Self {
            tokens: Vec::new(),
            expression: display_text(&[]),
            result: String::from(INITIAL_RESULT),
            config,
            evaluator,
        }
    }

    /// The current token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The expression display: every token's display text, or `"0"`.
    pub fn expression_text(&self) -> &str {
        &self.expression
    }

    /// The result display.
    pub fn result_text(&self) -> &str {
        &self.result
    }

    /// The settings this calculator was built with.
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// The evaluator in use.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Appends an input token, inserting an implicit `×` when implied.
    ///
    /// With [`CalcConfig::auto_evaluate_percent`] set, a `%` evaluates the
    /// expression right away.
    pub fn handle_input(&mut self, display: &str, value: &str) {
        if self.tokens.is_empty() {
            self.expression = String::new();
        }
        let added = assemble::handle_input(&mut self.tokens, display, value);
        for token in &self.tokens[self.tokens.len() - added..] {
            self.expression.push_str(&token.display);
        }
        if self.config.auto_evaluate_percent && classify(display, value) == Category::Percent {
            self.evaluate();
        }
    }

    /// Empties the expression and resets the result to `"0"`.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.result = String::from(INITIAL_RESULT);
        self.refresh();
    }

    /// Removes the last token. Does nothing when empty.
    pub fn delete_last(&mut self) {
        let Some(token) = self.tokens.pop() else {
            return;
        };
        if self.tokens.is_empty() {
            self.refresh();
        } else {
            let len = self.expression.len() - token.display.len();
            self.expression.truncate(len);
        }
    }

    /// The string handed to the evaluator: percents rewritten and
    /// parentheses balanced.
    pub fn evaluable(&self) -> Result<String, CalcError> {
        let rewritten = rewrite_percent(&self.tokens)?;
        Ok(auto_balance(&rewritten))
    }

    /// Evaluates the current tokens without touching any state.
    ///
    /// # Errors
    /// Any [`CalcError`] from the pipeline, including
    /// [`CalcError::NonFiniteResult`].
    pub fn try_evaluate(&self) -> Result<f64, CalcError> {
        let expr = self.evaluable()?;
        let n = self.evaluator.evaluate(&expr)?;
        if !n.is_finite() {
            return Err(CalcError::NonFiniteResult(n));
        }
        Ok(n)
    }

    /// Evaluates the expression and updates the displays.
    ///
    /// An empty expression is left alone. On failure the result display
    /// shows `"Error"` and the tokens are kept.
    pub fn evaluate(&mut self) {
        if self.tokens.is_empty() {
            return;
        }
        match self.try_evaluate() {
            Ok(n) => {
                let formatted = format_result(n);
                log::debug!("{} = {formatted}", self.expression);
                self.tokens = vec![Token::new(&formatted, n.to_string())];
                self.result = formatted;
                self.refresh();
            }
            Err(err) => {
                log::debug!("evaluating {:?} failed: {err}", self.expression);
                self.result = String::from(ERROR_TEXT);
            }
        }
    }

    /// Dispatches one action.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::Input { display, value } => self.handle_input(display, value),
            Action::Clear => self.clear(),
            Action::Delete => self.delete_last(),
            Action::Evaluate => self.evaluate(),
        }
    }

    /// Dispatches actions in order.
    pub fn apply_all<'a>(&mut self, actions: impl IntoIterator<Item = &'a Action>) {
        for action in actions {
            self.apply(action);
        }
    }

    fn refresh(&mut self) {
        self.expression = display_text(&self.tokens);
    }
}
