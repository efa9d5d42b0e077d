//! Rock-paper-scissors rules and round arbitration

pub mod arbiter;
pub mod choice;

pub use arbiter::{Arbiter, Party, RoundOutcome};
pub use choice::{Choice, Verdict};
