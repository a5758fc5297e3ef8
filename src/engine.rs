//! Calculator engine module.
//!
//! Provides `CalculatorEngine`, the input state machine. It consumes one
//! event at a time and leaves the display, history fragment and pending
//! operator consistent after every event, including failed ones.

use crate::config::EngineConfig;
use crate::error::CalcError;
use crate::format::NumberFormatter;
use crate::history::History;
use crate::input::Input;
use crate::mode::Mode;
use crate::numeric::{from_register, parse_operand, to_register};
use crate::operator::{self, BinaryOp, OperatorKind, UnaryOp};
use crate::state::EngineState;
use tracing::{debug, warn};

/// The calculation engine.
///
/// Strictly one pending operator, evaluated left to right: `3 + 4 × 2`
/// is `(3 + 4) × 2`.
///
/// Every mutating method returns `Result<(), CalcError>`. An `Err` has
/// already been applied when it is returned: the error message is on the
/// display, the pending operator is gone and the next digit starts a new
/// number. Callers may ignore it.
///
/// # Examples
///
/// ```rust
/// use tricalc::CalculatorEngine;
///
/// let mut engine = CalculatorEngine::new();
/// engine.input_digit('3').unwrap();
/// engine.input_operator("+").unwrap();
/// engine.input_digit('4').unwrap();
/// engine.equals().unwrap();
///
/// assert_eq!(engine.display(), "7");
/// assert_eq!(engine.history_fragment(), "3 + 4 = 7");
/// ```
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    state: EngineState,
    mode: Mode,
    formatter: NumberFormatter,
    history: History,
}

impl CalculatorEngine {
    /// Create an engine in Standard mode with default settings.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Create an engine from a configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricalc::{CalculatorEngine, EngineConfig, Mode};
    ///
    /// let config = EngineConfig {
    ///     initial_mode: Mode::Scientific,
    ///     ..EngineConfig::default()
    /// };
    /// let engine = CalculatorEngine::with_config(&config);
    /// assert_eq!(engine.mode(), Mode::Scientific);
    /// ```
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            state: EngineState::new(),
            mode: config.initial_mode,
            formatter: config.formatter(),
            history: History::with_limit(config.history_limit),
        }
    }

    /// Mode used to decide operator legality.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Current display text. Never empty.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Trace of the last operation, or `""` after a reset.
    pub fn history_fragment(&self) -> &str {
        &self.state.history_fragment
    }

    pub fn pending(&self) -> Option<BinaryOp> {
        self.state.pending
    }

    pub fn is_awaiting_new_entry(&self) -> bool {
        self.state.awaiting_new_entry
    }

    /// Completed calculations of this session, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, input: &Input) -> Result<(), CalcError> {
        match input {
            Input::Digit(digit) => self.input_digit(*digit),
            Input::Point => self.input_digit('.'),
            Input::Operator(symbol) => self.input_operator(symbol),
            Input::Equals => self.equals(),
            Input::Backspace => {
                self.backspace();
                Ok(())
            }
            Input::Clear => {
                self.clear();
                Ok(())
            }
            Input::SetMode(mode) => {
                self.reset_for(*mode);
                Ok(())
            }
        }
    }

    /// Enter a digit `'0'..='9'` or the decimal point.
    ///
    /// Starts a new number when awaiting one (`.` becomes `0.`), otherwise
    /// appends. A second decimal point is ignored. The display text is the
    /// entry buffer; nothing is parsed here.
    ///
    /// # Errors
    ///
    /// `CalcError::Parse` for any other character.
    pub fn input_digit(&mut self, token: char) -> Result<(), CalcError> {
        if !token.is_ascii_digit() && token != '.' {
            return Err(self.fail(CalcError::Parse(token.to_string())));
        }

        if self.state.awaiting_new_entry {
            self.state.display = if token == '.' {
                String::from("0.")
            } else {
                token.to_string()
            };
            self.state.awaiting_new_entry = false;
            self.state.errored = false;
        } else if token != '.' || !self.state.display.contains('.') {
            self.state.display.push(token);
        }
        Ok(())
    }

    /// Press an operator button.
    ///
    /// Unary symbols are applied immediately (see [`apply_unary`]). A
    /// binary symbol first resolves a pending operator when its second
    /// operand has been entered, then becomes the new pending operator
    /// with the display value as first operand.
    ///
    /// # Errors
    ///
    /// * `CalcError::IllegalOperator` if the symbol is not offered by the
    ///   current mode
    /// * any error from resolving the previous operator, in which case the
    ///   new operator is not adopted
    ///
    /// [`apply_unary`]: CalculatorEngine::apply_unary
    pub fn input_operator(&mut self, symbol: &str) -> Result<(), CalcError> {
        let spec = self.legal_spec(symbol)?;
        match spec.kind {
            OperatorKind::Binary(op) => self.input_binary(op),
            OperatorKind::Unary(op) => self.apply_unary_op(op, spec.symbol),
        }
    }

    /// Make `op` the pending operator.
    pub fn input_binary(&mut self, op: BinaryOp) -> Result<(), CalcError> {
        if self.state.pending.is_some() && !self.state.awaiting_new_entry {
            self.equals()?;
        }

        let first = self.display_value()?;
        self.state.first_operand = first;
        self.state.pending = Some(op);
        self.state.awaiting_new_entry = true;
        self.state.history_fragment =
            format!("{} {} ", self.operand_text(first, op.is_bitwise()), op.token());
        debug!(op = op.token(), first, "operator pending");
        Ok(())
    }

    /// Resolve the pending operator with the display value as second
    /// operand. Does nothing when no operator is pending.
    ///
    /// # Errors
    ///
    /// * `CalcError::DivisionByZero` for `÷` by zero
    /// * `DomainError::Undefined` for NaN or infinite results
    pub fn equals(&mut self) -> Result<(), CalcError> {
        let Some(op) = self.state.pending else {
            return Ok(());
        };

        let second = self.display_value()?;
        let first = self.state.first_operand;
        let result = op.evaluate(first, second).map_err(|err| self.fail(err))?;

        let text = self.formatter.format(result);
        let fragment = format!(
            "{} {} {} = {}",
            self.operand_text(first, op.is_bitwise()),
            op.token(),
            self.operand_text(second, op.is_bitwise()),
            text
        );
        debug!(calculation = %fragment, "resolved");

        self.state.display = text;
        self.state.pending = None;
        self.state.awaiting_new_entry = true;
        self.history.push(fragment.clone());
        self.state.history_fragment = fragment;
        Ok(())
    }

    /// Apply a unary operator (`√`, `x²`, `±`, `NOT`, `sin`, `log`, ...)
    /// to the display value.
    ///
    /// # Errors
    ///
    /// * `CalcError::IllegalOperator` if the symbol is not a unary
    ///   operator offered by the current mode
    /// * `CalcError::Domain` for arguments outside the operator's domain
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricalc::CalculatorEngine;
    ///
    /// let mut engine = CalculatorEngine::new();
    /// engine.input_digit('9').unwrap();
    /// engine.apply_unary("√").unwrap();
    /// assert_eq!(engine.display(), "3");
    /// assert_eq!(engine.history_fragment(), "√(9) = 3");
    /// ```
    pub fn apply_unary(&mut self, symbol: &str) -> Result<(), CalcError> {
        let spec = self.legal_spec(symbol)?;
        match spec.kind {
            OperatorKind::Unary(op) => self.apply_unary_op(op, spec.symbol),
            OperatorKind::Binary(_) => {
                warn!(symbol, mode = %self.mode, "binary operator used as unary");
                Err(self.fail(CalcError::IllegalOperator {
                    symbol: symbol.to_string(),
                    mode: self.mode,
                }))
            }
        }
    }

    fn apply_unary_op(&mut self, op: UnaryOp, symbol: &str) -> Result<(), CalcError> {
        let value = self.display_value()?;
        let result = op.evaluate(value).map_err(|err| self.fail(err))?;
        let text = self.formatter.format(result);

        // Sign toggle edits the entry in place.
        if op == UnaryOp::Negate {
            self.state.display = text;
            return Ok(());
        }

        let operand = self.operand_text(value, op == UnaryOp::Not);
        let fragment = format!("{}({}) = {}", symbol, operand, text);
        debug!(calculation = %fragment, "applied");

        self.state.display = text;
        self.state.awaiting_new_entry = true;
        self.history.push(fragment.clone());
        self.state.history_fragment = fragment;
        Ok(())
    }

    /// Delete the last character of the display.
    ///
    /// A single remaining character becomes `"0"` and the next digit starts
    /// a new number. An error message is replaced by `"0"` outright. The
    /// pending operator is left alone.
    pub fn backspace(&mut self) {
        if self.state.errored {
            self.state.display = String::from("0");
            self.state.errored = false;
            self.state.awaiting_new_entry = true;
            return;
        }

        if self.state.display.chars().count() > 1 {
            self.state.display.pop();
        } else {
            self.state.display = String::from("0");
            self.state.awaiting_new_entry = true;
        }
    }

    /// Reset the calculation. The session history is kept.
    pub fn clear(&mut self) {
        self.state = EngineState::new();
    }

    /// Clear and switch the legality mode.
    pub fn reset_for(&mut self, mode: Mode) {
        debug!(from = %self.mode, to = %mode, "mode reset");
        self.mode = mode;
        self.clear();
    }

    fn legal_spec(&mut self, symbol: &str) -> Result<&'static operator::OperatorSpec, CalcError> {
        operator::lookup(self.mode, symbol).map_err(|err| {
            warn!(symbol, mode = %self.mode, "operator not offered by the current mode");
            self.fail(err)
        })
    }

    /// Operands of register operators are shown as the integer they act on.
    fn operand_text(&self, value: f64, rounded: bool) -> String {
        if rounded {
            self.formatter.format(from_register(to_register(value)))
        } else {
            self.formatter.format(value)
        }
    }

    fn display_value(&mut self) -> Result<f64, CalcError> {
        parse_operand(&self.state.display).map_err(|err| self.fail(err))
    }

    /// Put `err` on the display and drop the calculation in progress.
    fn fail(&mut self, err: CalcError) -> CalcError {
        debug!(error = ?err, display = %self.state.display, "calculation failed");
        self.state.display = err.to_string();
        self.state.pending = None;
        self.state.awaiting_new_entry = true;
        self.state.errored = true;
        err
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
