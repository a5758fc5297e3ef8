//! Error types for the calculator engine.
//!
//! Every error the engine can hit while handling an input event is a
//! `CalcError`. The `Display` text of each variant is exactly what the
//! engine writes into the display, so presentation never has to map
//! errors to messages itself.

use crate::mode::Mode;
use thiserror::Error;

/// A unary or binary operation received an argument outside its domain.
///
/// # Examples
///
/// ```rust
/// use tricalc::DomainError;
///
/// assert_eq!(DomainError::NegativeRoot.to_string(), "Error: Negative number");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Square root of a negative number.
    #[error("Error: Negative number")]
    NegativeRoot,

    /// `log` or `ln` of zero or a negative number.
    #[error("Error: x ≤ 0")]
    NonPositiveLog,

    /// The operation produced NaN or an infinity.
    ///
    /// Covers `x % 0`, `0 xʸ -1`, and overflow past `f64::MAX`.
    #[error("Error: Undefined result")]
    Undefined,
}

/// Errors that can occur while the engine handles an input event.
///
/// These never escape as failures: by the time one is returned the engine
/// has already put its message on the display and is ready for new input.
///
/// # Examples
///
/// ```rust
/// use tricalc::CalcError;
///
/// let err = CalcError::DivisionByZero;
/// assert_eq!(err.to_string(), "Error: Division by zero");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// `÷` with a second operand of exactly zero.
    #[error("Error: Division by zero")]
    DivisionByZero,

    /// An argument outside the operation's domain.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The display text could not be read back as a number.
    ///
    /// Normally unreachable, but a half-deleted entry such as `"-"` or an
    /// error message still on the display will end up here.
    #[error("Error")]
    Parse(String),

    /// An operator symbol that the current mode does not offer.
    #[error("Error")]
    IllegalOperator { symbol: String, mode: Mode },
}

/// Errors raised while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text was not valid JSON for the config schema.
    #[error("Invalid engine configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A field parsed but holds an unusable value.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Error: Division by zero"
        );
        assert_eq!(
            CalcError::from(DomainError::NonPositiveLog).to_string(),
            "Error: x ≤ 0"
        );
    }

    #[test]
    fn test_messages_are_mode_independent() {
        let std = CalcError::IllegalOperator {
            symbol: "AND".into(),
            mode: Mode::Standard,
        };
        let sci = CalcError::IllegalOperator {
            symbol: "AND".into(),
            mode: Mode::Scientific,
        };
        assert_eq!(std.to_string(), sci.to_string());
        assert_eq!(CalcError::Parse("-".into()).to_string(), "Error");
    }

    #[test]
    fn test_config_error_wraps_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(err.to_string().starts_with("Invalid engine configuration"));
    }
}
