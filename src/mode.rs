//! Calculator mode module.
//!
//! Provides the `Mode` type. The mode decides which operators are legal
//! and which button layout presentation should render.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The calculator's operating mode.
///
/// # Examples
///
/// ```rust
/// use tricalc::Mode;
///
/// let mode: Mode = "sci".parse().unwrap();
/// assert_eq!(mode, Mode::Scientific);
/// assert_eq!(mode.to_string(), "Scientific");
/// ```
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Four-function arithmetic plus square, square root and power.
    #[default]
    Standard,
    /// Standard plus degree-based trigonometry and logarithms.
    Scientific,
    /// Arithmetic plus bitwise operators on fixed-width integers.
    Programmer,
}

impl Mode {
    /// All modes, in the order presentation usually lists them.
    pub const ALL: [Mode; 3] = [Mode::Standard, Mode::Scientific, Mode::Programmer];

    /// Short label for a mode switch button.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricalc::Mode;
    ///
    /// assert_eq!(Mode::Programmer.short_label(), "PROG");
    /// ```
    pub fn short_label(self) -> &'static str {
        match self {
            Mode::Standard => "STD",
            Mode::Scientific => "SCI",
            Mode::Programmer => "PROG",
        }
    }
}

/// Returned when a string names no known mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown calculator mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "std" => Ok(Mode::Standard),
            "scientific" | "sci" => Ok(Mode::Scientific),
            "programmer" | "prog" => Ok(Mode::Programmer),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Standard => "Standard",
            Mode::Scientific => "Scientific",
            Mode::Programmer => "Programmer",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("Standard".parse::<Mode>(), Ok(Mode::Standard));
        assert_eq!(" PROG ".parse::<Mode>(), Ok(Mode::Programmer));
        assert!("hex".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&Mode::Scientific).unwrap();
        assert_eq!(json, "\"scientific\"");
        let back: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mode::Scientific);
    }
}
