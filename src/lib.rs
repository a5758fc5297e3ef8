//! # tricalc - Three-Mode Calculator Engine
//!
//! The calculation core of a desktop-style calculator with three modes:
//! - **Standard**: `+ - × ÷ %`, power, square, square root
//! - **Scientific**: Standard plus degree-based `sin cos tan`, `log`, `ln`
//! - **Programmer**: arithmetic plus `AND OR XOR NOT << >>` on fixed-width integers
//!
//! ## Core Concepts
//!
//! ### Accumulator Model
//!
//! There is exactly one pending operator. Operators resolve left to right,
//! so `3 + 4 × 2` is `14`, not `11`:
//!
//! ```text
//! [digits] → [operator] → [digits] → [operator | =] → result
//! ```
//!
//! 1. **Digits** build up the display text; nothing is parsed until an
//!    operator needs a value
//! 2. **Operators** snapshot the display as the first operand
//! 3. **Equals** resolves the pending operator and writes the result
//!
//! ### Errors Never Escape
//!
//! Division by zero, domain errors and contract violations put a fixed
//! message on the display and leave the engine ready for the next digit.
//! Operations still return a `Result` so a caller can react if it wants.
//!
//! ## Example
//!
//! ```rust
//! use tricalc::*;
//!
//! let mut calc = ModeController::new();
//! for label in ["3", "+", "4", "×", "2", "="] {
//!     calc.press(label).unwrap();
//! }
//! assert_eq!(calc.current_display_text(), "14");
//! assert_eq!(calc.current_history_text(), "7 × 2 = 14");
//!
//! calc.set_mode(Mode::Programmer);
//! for label in ["5", "XOR", "3", "="] {
//!     calc.press(label).unwrap();
//! }
//! assert_eq!(calc.current_display_text(), "6");
//! ```
//!
//! ## Modules
//!
//! - [`controller`] - Mode switching and the presentation-facing API
//! - [`engine`] - The accumulator state machine
//! - [`operator`] - Operator table, evaluation and button layouts
//! - [`format`] - Display formatting
//! - [`input`] - Input events
//! - [`state`] - Engine state snapshot
//! - [`history`] - Session history
//! - [`config`] - Engine configuration
//! - [`numeric`] - Operand parsing and register conversion
//! - [`mode`] - Calculator modes
//! - [`error`] - Error types
//!
//! ## Features
//!
//! - `wide-registers`: Programmer-mode bitwise operators work on `i64`
//!   instead of `i32`.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod format;
pub mod history;
pub mod input;
pub mod mode;
pub mod numeric;
pub mod operator;
pub mod state;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use controller::ModeController;
pub use engine::CalculatorEngine;
pub use error::{CalcError, ConfigError, DomainError};
pub use format::NumberFormatter;
pub use history::History;
pub use input::Input;
pub use mode::Mode;
pub use state::EngineState;

pub use numeric::Register;
pub use operator::{BinaryOp, Layout, OperatorKind, OperatorSpec, UnaryOp};
