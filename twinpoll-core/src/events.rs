//! Events reported by the controllers
//!
//! Each poll step hands back what happened so the firmware can log it
//! without the controllers knowing about any logging backend.

use crate::game::{Choice, Party, RoundOutcome};
use crate::keypad::KeypadCell;
use crate::serial::{AccumulatorError, CompletedExpression};

/// Something observable that a poll step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Calculator events
    /// Operand prompt written
    Prompted,
    /// Expression terminated and its product acted on
    ProductComputed {
        expression: CompletedExpression,
        product: u64,
        /// LED bank lit (product above threshold)
        lit: bool,
    },
    /// Expression discarded because of a bad byte or an oversized operand
    InputRejected(AccumulatorError),

    // Game events
    /// Round banner written
    RoundStarted,
    /// A party's move was recorded for this round
    ChoiceRecorded { party: Party, choice: Choice },
    /// Keypad press that does not map to a move
    KeyIgnored(KeypadCell),
    /// Both moves in, verdict announced
    RoundResolved(RoundOutcome),
}
