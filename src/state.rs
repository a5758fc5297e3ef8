//! Engine state module.
//!
//! `EngineState` is the complete state of one calculation session. The
//! engine owns it and is its only mutator; everyone else sees it through
//! `CalculatorEngine::state()`.

use crate::operator::BinaryOp;
use serde::{Deserialize, Serialize};

/// Snapshot of the accumulator state machine.
///
/// Serializable, so a host can log or compare snapshots.
///
/// Invariants maintained by the engine:
/// - `display` is never empty.
/// - `pending.is_none()` exactly when no binary calculation is in progress.
/// - While `pending` is set, `first_operand` does not change until the
///   operator resolves or the engine is cleared.
/// - `errored` implies `awaiting_new_entry`.
///
/// # Examples
///
/// ```rust
/// use tricalc::EngineState;
///
/// let state = EngineState::new();
/// assert_eq!(state.display, "0");
/// assert!(state.awaiting_new_entry);
/// assert!(!state.is_calculating());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Text on the display: a number, a partial entry, or an error message.
    pub display: String,

    /// Binary operator chosen but not yet resolved.
    pub pending: Option<BinaryOp>,

    /// Accumulator snapshot taken when `pending` was chosen.
    pub first_operand: f64,

    /// The next digit starts a fresh number instead of appending.
    pub awaiting_new_entry: bool,

    /// Trace of the last operation, e.g. `"3 + 4 = 7"`.
    pub history_fragment: String,

    /// The display holds an error message.
    pub errored: bool,
}

impl EngineState {
    /// The reset state: display `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            display: String::from("0"),
            pending: None,
            first_operand: 0.0,
            awaiting_new_entry: true,
            history_fragment: String::new(),
            errored: false,
        }
    }

    /// Whether a binary calculation is waiting for its second operand.
    pub fn is_calculating(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}
