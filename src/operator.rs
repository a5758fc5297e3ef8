//! Operator table module.
//!
//! Operators are plain enums (`BinaryOp`, `UnaryOp`) wrapped in an
//! `OperatorKind`. A static table of `OperatorSpec`s maps each button
//! symbol to its kind and the modes that offer it, so legality is a
//! single lookup keyed by `(Mode, symbol)`.
//!
//! The table also carries the button layout for each mode. Every operator
//! label in a layout is legal in that mode.

use crate::error::{CalcError, DomainError};
use crate::mode::Mode;
use crate::numeric::{from_register, to_register, Register};
use serde::{Deserialize, Serialize};

/// Operators that combine the pending first operand with a second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Floating-point remainder, sign follows the dividend.
    Modulo,
    Power,
    And,
    Or,
    Xor,
    ShiftLeft,
    /// Arithmetic (sign-extending) right shift.
    ShiftRight,
}

impl BinaryOp {
    /// The token used for this operator in history fragments.
    ///
    /// This is the button symbol, except for power which shows as `^`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricalc::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::Multiply.token(), "×");
    /// assert_eq!(BinaryOp::Power.token(), "^");
    /// ```
    pub fn token(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Modulo => "%",
            BinaryOp::Power => "^",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Xor => "XOR",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
        }
    }

    /// Whether the operator acts on operands rounded into a `Register`.
    pub fn is_bitwise(self) -> bool {
        matches!(
            self,
            BinaryOp::And | BinaryOp::Or | BinaryOp::Xor | BinaryOp::ShiftLeft | BinaryOp::ShiftRight
        )
    }

    /// Evaluate `lhs op rhs`.
    ///
    /// # Errors
    ///
    /// * `CalcError::DivisionByZero` for `÷` with `rhs == 0`
    /// * `DomainError::Undefined` when the result is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricalc::{BinaryOp, CalcError};
    ///
    /// assert_eq!(BinaryOp::Add.evaluate(3.0, 4.0), Ok(7.0));
    /// assert_eq!(BinaryOp::And.evaluate(5.0, 3.0), Ok(1.0));
    /// assert_eq!(BinaryOp::Divide.evaluate(5.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn evaluate(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
            BinaryOp::Modulo => lhs % rhs,
            BinaryOp::Power => lhs.powf(rhs),
            BinaryOp::And => bitwise(lhs, rhs, |a, b| a & b),
            BinaryOp::Or => bitwise(lhs, rhs, |a, b| a | b),
            BinaryOp::Xor => bitwise(lhs, rhs, |a, b| a ^ b),
            // Shift counts wrap modulo the register width.
            BinaryOp::ShiftLeft => bitwise(lhs, rhs, |a, b| a.wrapping_shl(b as u32)),
            BinaryOp::ShiftRight => bitwise(lhs, rhs, |a, b| a.wrapping_shr(b as u32)),
        };
        finite(result)
    }
}

/// Operators that act on the displayed value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    SquareRoot,
    Square,
    /// Sign toggle. Rewrites the display only.
    Negate,
    /// Bitwise complement of the rounded register value.
    Not,
    /// Sine of an angle in degrees.
    Sin,
    /// Cosine of an angle in degrees.
    Cos,
    /// Tangent of an angle in degrees.
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
}

impl UnaryOp {
    /// Evaluate the operator on `value`.
    ///
    /// # Errors
    ///
    /// * `DomainError::NegativeRoot` for `√` of a negative value
    /// * `DomainError::NonPositiveLog` for `log`/`ln` of a value `<= 0`
    /// * `DomainError::Undefined` when the result is NaN or infinite
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tricalc::{UnaryOp, CalcError, DomainError};
    ///
    /// assert_eq!(UnaryOp::SquareRoot.evaluate(9.0), Ok(3.0));
    /// assert_eq!(
    ///     UnaryOp::Ln.evaluate(0.0),
    ///     Err(CalcError::Domain(DomainError::NonPositiveLog))
    /// );
    /// ```
    pub fn evaluate(self, value: f64) -> Result<f64, CalcError> {
        let result = match self {
            UnaryOp::SquareRoot => {
                if value < 0.0 {
                    return Err(DomainError::NegativeRoot.into());
                }
                value.sqrt()
            }
            UnaryOp::Square => value * value,
            UnaryOp::Negate => -value,
            UnaryOp::Not => from_register(!to_register(value)),
            UnaryOp::Sin => value.to_radians().sin(),
            UnaryOp::Cos => value.to_radians().cos(),
            UnaryOp::Tan => value.to_radians().tan(),
            UnaryOp::Log | UnaryOp::Ln => {
                if value <= 0.0 {
                    return Err(DomainError::NonPositiveLog.into());
                }
                if self == UnaryOp::Log {
                    value.log10()
                } else {
                    value.ln()
                }
            }
        };
        finite(result)
    }
}

fn bitwise(lhs: f64, rhs: f64, op: impl Fn(Register, Register) -> Register) -> f64 {
    from_register(op(to_register(lhs), to_register(rhs)))
}

fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::Undefined.into())
    }
}

/// Binary or unary operator, as stored in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl OperatorKind {
    /// Number of operands the operator consumes.
    pub fn arity(self) -> u8 {
        match self {
            OperatorKind::Binary(_) => 2,
            OperatorKind::Unary(_) => 1,
        }
    }
}

/// One entry of the operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    /// The button label.
    pub symbol: &'static str,
    /// What the operator does.
    pub kind: OperatorKind,
    /// Modes in which the operator is legal.
    pub modes: &'static [Mode],
}

impl OperatorSpec {
    const fn binary(symbol: &'static str, op: BinaryOp, modes: &'static [Mode]) -> Self {
        Self {
            symbol,
            kind: OperatorKind::Binary(op),
            modes,
        }
    }

    const fn unary(symbol: &'static str, op: UnaryOp, modes: &'static [Mode]) -> Self {
        Self {
            symbol,
            kind: OperatorKind::Unary(op),
            modes,
        }
    }

    /// Whether this operator may be used in `mode`.
    pub fn is_legal_in(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }
}

const EVERY_MODE: &[Mode] = &[Mode::Standard, Mode::Scientific, Mode::Programmer];
const DECIMAL_MODES: &[Mode] = &[Mode::Standard, Mode::Scientific];
const SCIENTIFIC: &[Mode] = &[Mode::Scientific];
const PROGRAMMER: &[Mode] = &[Mode::Programmer];

/// Every operator the calculator knows, with the modes that offer it.
pub static OPERATORS: &[OperatorSpec] = &[
    OperatorSpec::binary("+", BinaryOp::Add, EVERY_MODE),
    OperatorSpec::binary("-", BinaryOp::Subtract, EVERY_MODE),
    OperatorSpec::binary("×", BinaryOp::Multiply, EVERY_MODE),
    OperatorSpec::binary("÷", BinaryOp::Divide, EVERY_MODE),
    OperatorSpec::binary("%", BinaryOp::Modulo, EVERY_MODE),
    OperatorSpec::binary("xʸ", BinaryOp::Power, DECIMAL_MODES),
    OperatorSpec::unary("√", UnaryOp::SquareRoot, DECIMAL_MODES),
    OperatorSpec::unary("x²", UnaryOp::Square, DECIMAL_MODES),
    OperatorSpec::unary("±", UnaryOp::Negate, EVERY_MODE),
    OperatorSpec::unary("sin", UnaryOp::Sin, SCIENTIFIC),
    OperatorSpec::unary("cos", UnaryOp::Cos, SCIENTIFIC),
    OperatorSpec::unary("tan", UnaryOp::Tan, SCIENTIFIC),
    OperatorSpec::unary("log", UnaryOp::Log, SCIENTIFIC),
    OperatorSpec::unary("ln", UnaryOp::Ln, SCIENTIFIC),
    OperatorSpec::binary("AND", BinaryOp::And, PROGRAMMER),
    OperatorSpec::binary("OR", BinaryOp::Or, PROGRAMMER),
    OperatorSpec::binary("XOR", BinaryOp::Xor, PROGRAMMER),
    OperatorSpec::binary("<<", BinaryOp::ShiftLeft, PROGRAMMER),
    OperatorSpec::binary(">>", BinaryOp::ShiftRight, PROGRAMMER),
    OperatorSpec::unary("NOT", UnaryOp::Not, PROGRAMMER),
];

/// Map keyboard aliases onto the canonical button symbol.
///
/// # Examples
///
/// ```rust
/// use tricalc::operator::canonical_symbol;
///
/// assert_eq!(canonical_symbol("*"), "×");
/// assert_eq!(canonical_symbol("\u{2212}"), "-");
/// assert_eq!(canonical_symbol("AND"), "AND");
/// ```
pub fn canonical_symbol(symbol: &str) -> &str {
    match symbol {
        "\u{2212}" => "-",
        "*" => "×",
        "/" => "÷",
        "^" => "xʸ",
        "~" => "NOT",
        other => other,
    }
}

/// Find the table entry for `symbol`, regardless of mode.
pub fn find(symbol: &str) -> Option<&'static OperatorSpec> {
    let symbol = canonical_symbol(symbol);
    OPERATORS.iter().find(|spec| spec.symbol == symbol)
}

/// Find the entry for `symbol` if it is legal in `mode`.
///
/// # Errors
///
/// `CalcError::IllegalOperator` if the symbol is unknown or not offered
/// by `mode`.
///
/// # Examples
///
/// ```rust
/// use tricalc::{Mode, operator::lookup};
///
/// assert!(lookup(Mode::Programmer, "XOR").is_ok());
/// assert!(lookup(Mode::Standard, "XOR").is_err());
/// ```
pub fn lookup(mode: Mode, symbol: &str) -> Result<&'static OperatorSpec, CalcError> {
    find(symbol)
        .filter(|spec| spec.is_legal_in(mode))
        .ok_or_else(|| CalcError::IllegalOperator {
            symbol: symbol.to_string(),
            mode,
        })
}

/// All operator symbols legal in `mode`, in table order.
pub fn legal_symbols(mode: Mode) -> impl Iterator<Item = &'static str> {
    OPERATORS
        .iter()
        .filter(move |spec| spec.is_legal_in(mode))
        .map(|spec| spec.symbol)
}

/// Rows of button labels, top to bottom.
pub type Layout = &'static [&'static [&'static str]];

const STANDARD_LAYOUT: Layout = &[
    &["C", "⌫", "%", "÷"],
    &["√", "x²", "xʸ", "×"],
    &["7", "8", "9", "-"],
    &["4", "5", "6", "+"],
    &["1", "2", "3", "="],
    &["±", "0", ".", "="],
];

const SCIENTIFIC_LAYOUT: Layout = &[
    &["C", "⌫", "sin", "cos"],
    &["tan", "ln", "log", "÷"],
    &["√", "x²", "xʸ", "×"],
    &["7", "8", "9", "-"],
    &["4", "5", "6", "+"],
    &["1", "2", "3", "%"],
    &["±", "0", ".", "="],
];

const PROGRAMMER_LAYOUT: Layout = &[
    &["C", "⌫", "AND", "OR"],
    &["XOR", "NOT", "<<", ">>"],
    &["%", "÷", "×", "-"],
    &["7", "8", "9", "+"],
    &["4", "5", "6", "="],
    &["1", "2", "3", "="],
    &["±", "0", ".", "="],
];

/// The button layout presentation should render for `mode`.
pub fn layout(mode: Mode) -> Layout {
    match mode {
        Mode::Standard => STANDARD_LAYOUT,
        Mode::Scientific => SCIENTIFIC_LAYOUT,
        Mode::Programmer => PROGRAMMER_LAYOUT,
    }
}
