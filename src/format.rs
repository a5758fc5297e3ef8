//! Display formatting for accumulator values.

/// Default number of fractional digits kept on the display.
pub const DEFAULT_FRACTION_DIGITS: usize = 10;

/// Renders accumulator values as display strings.
///
/// Integral values (those equal to their own `i64` truncation) print with
/// no decimal point. Everything else prints as its shortest round-trip
/// decimal, so `1000000000.1` reads back as typed. Only when that needs
/// more than `max_fraction_digits` fractional digits is it rounded to the
/// limit, with trailing zeros dropped.
///
/// # Examples
///
/// ```rust
/// use tricalc::NumberFormatter;
///
/// let formatter = NumberFormatter::default();
/// assert_eq!(formatter.format(4.0), "4");
/// assert_eq!(formatter.format(0.1 + 0.2), "0.3");
/// assert_eq!(formatter.format(-1.0 / 3.0), "-0.3333333333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatter {
    max_fraction_digits: usize,
}

impl NumberFormatter {
    /// Create a formatter keeping at most `max_fraction_digits` digits.
    pub fn new(max_fraction_digits: usize) -> Self {
        Self {
            max_fraction_digits,
        }
    }

    /// The fractional digit limit.
    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    /// Format a value for the display.
    pub fn format(&self, value: f64) -> String {
        let truncated = value as i64;
        if value == truncated as f64 {
            // Also catches -0.0.
            return truncated.to_string();
        }

        // f64 `Display` never uses an exponent.
        let shortest = value.to_string();
        let fits = shortest
            .split_once('.')
            .map_or(true, |(_, fraction)| fraction.len() <= self.max_fraction_digits);
        if fits {
            return shortest;
        }

        let fixed = format!("{:.*}", self.max_fraction_digits, value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };

        // A tiny negative value can round to "-0".
        if trimmed == "-0" {
            String::from("0")
        } else {
            trimmed.to_string()
        }
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_FRACTION_DIGITS)
    }
}

/// Format with the default formatter.
///
/// # Examples
///
/// ```rust
/// use tricalc::format::format_number;
///
/// assert_eq!(format_number(2.50), "2.5");
/// ```
pub fn format_number(value: f64) -> String {
    NumberFormatter::default().format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn test_beyond_i64_stays_positional() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert!(!format_number(-1e19).contains('e'));
    }

    #[test]
    fn test_fraction_trimming() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.0 / 3.0), "0.6666666667");
        assert_eq!(format_number(1e-12), "0");
        assert_eq!(format_number(-1e-12), "0");
    }

    #[test]
    fn test_large_magnitudes_print_as_typed() {
        assert_eq!(format_number(1000000000.1), "1000000000.1");
        assert_eq!(format_number(-1000000000.1), "-1000000000.1");
        assert_eq!(format_number(123456789012.25), "123456789012.25");
        assert_eq!(format_number(1e6 + 0.7), "1000000.7");
        assert_eq!(format_number(1e15 + 0.5), "1000000000000000.5");
    }

    #[test]
    fn test_custom_precision() {
        let formatter = NumberFormatter::new(2);
        assert_eq!(formatter.format(3.14159), "3.14");
        assert_eq!(formatter.format(0.001), "0");
        assert_eq!(formatter.max_fraction_digits(), 2);
    }

    #[test]
    fn test_zero_precision() {
        let formatter = NumberFormatter::new(0);
        assert_eq!(formatter.format(2.4), "2");
        assert_eq!(formatter.format(7.0), "7");
    }
}
