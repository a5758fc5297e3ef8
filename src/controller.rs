//! Mode controller module.
//!
//! `ModeController` is the surface presentation talks to. It owns the
//! engine, switches modes, and hands out the button layout for each mode.

use crate::config::EngineConfig;
use crate::engine::CalculatorEngine;
use crate::error::CalcError;
use crate::history::History;
use crate::input::Input;
use crate::mode::Mode;
use crate::operator::{self, Layout};

/// Presentation-facing calculator: mode switching plus the event and
/// query interface of the engine.
///
/// # Examples
///
/// ```rust
/// use tricalc::{ModeController, Mode};
///
/// let mut calc = ModeController::new();
/// let layout = calc.set_mode(Mode::Programmer);
/// assert_eq!(layout[0], ["C", "⌫", "AND", "OR"]);
///
/// for label in ["5", "AND", "3", "="] {
///     calc.press(label).unwrap();
/// }
/// assert_eq!(calc.current_display_text(), "1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    engine: CalculatorEngine,
}

impl ModeController {
    /// Create a controller in Standard mode with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller from a configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_config(config),
        }
    }

    pub fn mode(&self) -> Mode {
        self.engine.mode()
    }

    /// Switch to `mode` and return its button layout.
    ///
    /// Always resets the calculation, even when `mode` is the current one.
    /// A pending operator never carries over.
    pub fn set_mode(&mut self, mode: Mode) -> Layout {
        self.engine.reset_for(mode);
        operator::layout(mode)
    }

    /// Button layout for `mode`, top row first.
    pub fn legal_operator_layout(&self, mode: Mode) -> Layout {
        operator::layout(mode)
    }

    /// Button layout for the current mode.
    pub fn current_layout(&self) -> Layout {
        operator::layout(self.mode())
    }

    pub fn digit(&mut self, token: char) -> Result<(), CalcError> {
        self.engine.input_digit(token)
    }

    pub fn operator(&mut self, symbol: &str) -> Result<(), CalcError> {
        self.engine.input_operator(symbol)
    }

    pub fn equals(&mut self) -> Result<(), CalcError> {
        self.engine.equals()
    }

    pub fn unary(&mut self, symbol: &str) -> Result<(), CalcError> {
        self.engine.apply_unary(symbol)
    }

    pub fn backspace(&mut self) {
        self.engine.backspace();
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Dispatch a raw button label.
    pub fn press(&mut self, label: &str) -> Result<(), CalcError> {
        self.handle(&Input::from_label(label))
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, input: &Input) -> Result<(), CalcError> {
        match input {
            Input::SetMode(mode) => {
                self.set_mode(*mode);
                Ok(())
            }
            other => self.engine.handle(other),
        }
    }

    pub fn current_display_text(&self) -> &str {
        self.engine.display()
    }

    pub fn current_history_text(&self) -> &str {
        self.engine.history_fragment()
    }

    /// Completed calculations of this session.
    pub fn history(&self) -> &History {
        self.engine.history()
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_configured_mode() {
        let config = EngineConfig {
            initial_mode: Mode::Programmer,
            ..EngineConfig::default()
        };
        let calc = ModeController::with_config(&config);
        assert_eq!(calc.mode(), Mode::Programmer);
        assert_eq!(calc.current_layout()[1][0], "XOR");
    }

    #[test]
    fn test_set_mode_resets() {
        let mut calc = ModeController::new();
        calc.press("3").unwrap();
        calc.press("+").unwrap();
        let layout = calc.set_mode(Mode::Scientific);

        assert_eq!(layout, calc.legal_operator_layout(Mode::Scientific));
        assert_eq!(calc.current_display_text(), "0");
        assert_eq!(calc.current_history_text(), "");
        assert_eq!(calc.engine().pending(), None);
    }

    #[test]
    fn test_set_same_mode_still_resets() {
        let mut calc = ModeController::new();
        calc.press("9").unwrap();
        calc.set_mode(Mode::Standard);
        assert_eq!(calc.current_display_text(), "0");
    }

    #[test]
    fn test_event_interface() {
        let mut calc = ModeController::new();
        calc.digit('8').unwrap();
        calc.operator("÷").unwrap();
        calc.digit('2').unwrap();
        calc.equals().unwrap();
        assert_eq!(calc.current_display_text(), "4");
        calc.unary("x²").unwrap();
        assert_eq!(calc.current_display_text(), "16");
        calc.backspace();
        assert_eq!(calc.current_display_text(), "1");
        calc.clear();
        assert_eq!(calc.current_display_text(), "0");
        assert_eq!(calc.history().len(), 2);
    }

    #[test]
    fn test_handle_set_mode() {
        let mut calc = ModeController::new();
        calc.handle(&Input::SetMode(Mode::Scientific)).unwrap();
        assert_eq!(calc.mode(), Mode::Scientific);
        calc.press("1").unwrap();
        calc.press("0").unwrap();
        calc.press("0").unwrap();
        calc.press("log").unwrap();
        assert_eq!(calc.current_display_text(), "2");
        assert_eq!(calc.current_history_text(), "log(100) = 2");
    }
}
