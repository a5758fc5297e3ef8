//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration.

use crate::error::ConfigError;
use crate::format::{NumberFormatter, DEFAULT_FRACTION_DIGITS};
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};

/// Highest accepted `max_fraction_digits`. Beyond this an `f64` has no
/// meaningful digits left to show.
pub const MAX_FRACTION_DIGITS: usize = 17;

/// Runtime settings for a `CalculatorEngine`.
///
/// # Examples
///
/// ```rust
/// use tricalc::{EngineConfig, Mode};
///
/// let config = EngineConfig::from_json(r#"{ "initial_mode": "programmer" }"#).unwrap();
/// assert_eq!(config.initial_mode, Mode::Programmer);
/// assert_eq!(config.max_fraction_digits, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fractional digits kept when formatting non-integral results.
    pub max_fraction_digits: usize,
    /// Completed calculations kept in the session history. Zero disables it.
    pub history_limit: usize,
    /// Mode the engine starts in.
    pub initial_mode: Mode,
}

impl EngineConfig {
    /// Parse a configuration from JSON text and validate it.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Json` if the text is not a valid config object
    /// * `ConfigError::InvalidValue` if `max_fraction_digits` is too large
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::InvalidValue {
                field: "max_fraction_digits",
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.max_fraction_digits, MAX_FRACTION_DIGITS
                ),
            });
        }
        Ok(())
    }

    /// The formatter described by this configuration.
    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter::new(self.max_fraction_digits)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            initial_mode: Mode::Standard,
        }
    }
}
