//! Input events module.
//!
//! An `Input` is one discrete gesture forwarded by presentation. Button
//! labels resolve to inputs through `Input::from_label`, so a front end
//! can wire every button to the same handler.

use crate::mode::Mode;
use serde::{Deserialize, Serialize};

/// Label of the clear button.
pub const CLEAR_LABEL: &str = "C";
/// Label of the backspace button.
pub const BACKSPACE_LABEL: &str = "⌫";
/// Label of the equals button.
pub const EQUALS_LABEL: &str = "=";

/// A single input event.
///
/// Serializable, so a sequence of inputs can be recorded and replayed.
///
/// # Examples
///
/// ```rust
/// use tricalc::Input;
///
/// assert_eq!(Input::from_label("7"), Input::Digit('7'));
/// assert_eq!(Input::from_label("."), Input::Point);
/// assert_eq!(Input::from_label("⌫"), Input::Backspace);
/// assert_eq!(Input::from_label("AND"), Input::Operator("AND".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Input {
    /// A digit key, `'0'..='9'`.
    Digit(char),
    /// The decimal point key.
    Point,
    /// Any operator button, binary or unary.
    Operator(String),
    /// The equals key.
    Equals,
    /// Delete the last entered character.
    Backspace,
    /// Reset the calculation.
    Clear,
    /// Switch mode. Resets the calculation.
    SetMode(Mode),
}

impl Input {
    /// Resolve a button label to the input it stands for.
    ///
    /// Labels that are not digits, `.`, `=`, `C` or `⌫` are treated as
    /// operators; the engine decides whether they are legal.
    pub fn from_label(label: &str) -> Self {
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Input::Digit(c);
            }
            if c == '.' {
                return Input::Point;
            }
        }
        match label {
            EQUALS_LABEL => Input::Equals,
            CLEAR_LABEL => Input::Clear,
            BACKSPACE_LABEL => Input::Backspace,
            other => Input::Operator(other.to_string()),
        }
    }
}
