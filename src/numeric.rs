//! Numeric helpers shared by the engine and the operator table.
//!
//! The accumulator is always an `f64`. Programmer-mode bitwise operators
//! round their operands into a fixed-width signed `Register` first. The
//! width is `i32` by default, or `i64` when the `wide-registers` feature
//! is enabled.

use crate::error::CalcError;

/// Integer type used for bitwise operators.
///
/// Two's complement, `i32` unless the `wide-registers` feature is enabled.
#[cfg(not(feature = "wide-registers"))]
pub type Register = i32;

#[cfg(feature = "wide-registers")]
pub type Register = i64;

/// Number of bits in a `Register`. Shift counts wrap modulo this value.
pub const REGISTER_BITS: u32 = Register::BITS;

/// Round an accumulator value into a `Register`.
///
/// Rounds half up (`floor(x + 0.5)`), saturates at the `i64` range, then
/// keeps the low `REGISTER_BITS` bits. NaN becomes 0.
///
/// # Examples
///
/// ```rust
/// use tricalc::numeric::to_register;
///
/// assert_eq!(to_register(2.5), 3);
/// assert_eq!(to_register(-2.5), -2);
/// assert_eq!(to_register(4.4), 4);
/// ```
pub fn to_register(value: f64) -> Register {
    ((value + 0.5).floor() as i64) as Register
}

/// Carry a register value back into the accumulator.
pub fn from_register(value: Register) -> f64 {
    value as f64
}

/// Read the display text back as an operand.
///
/// Accepts partial entries such as `"5."` or `"0."`. Anything else that
/// does not parse, including an error message, yields `CalcError::Parse`.
///
/// # Examples
///
/// ```rust
/// use tricalc::numeric::parse_operand;
///
/// assert_eq!(parse_operand("5.").unwrap(), 5.0);
/// assert!(parse_operand("-").is_err());
/// ```
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| CalcError::Parse(text.to_string()))?;
    // "inf" and "NaN" parse as f64 but are never valid entries.
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Parse(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(to_register(0.5), 1);
        assert_eq!(to_register(-0.5), 0);
        assert_eq!(to_register(-1.6), -2);
        assert_eq!(to_register(f64::NAN), 0);
    }

    #[cfg(not(feature = "wide-registers"))]
    #[test]
    fn test_register_wraps_to_32_bits() {
        assert_eq!(REGISTER_BITS, 32);
        assert_eq!(to_register(2_147_483_648.0), i32::MIN);
        assert_eq!(to_register(4_294_967_297.0), 1);
    }

    #[cfg(feature = "wide-registers")]
    #[test]
    fn test_register_is_64_bits() {
        assert_eq!(REGISTER_BITS, 64);
        assert_eq!(to_register(2_147_483_648.0), 2_147_483_648);
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("0.").unwrap(), 0.0);
        assert_eq!(parse_operand("07").unwrap(), 7.0);
        assert_eq!(parse_operand("-3.25").unwrap(), -3.25);
        assert!(matches!(parse_operand("inf"), Err(CalcError::Parse(_))));
        assert!(matches!(
            parse_operand("Error: Division by zero"),
            Err(CalcError::Parse(_))
        ));
    }
}
