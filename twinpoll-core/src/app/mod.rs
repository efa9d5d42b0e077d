//! The two controller programs
//!
//! Both are polled super-loops: the firmware calls `start` once and then
//! `poll` forever. All hardware access goes through the `twinpoll-hal`
//! traits, so the same code runs against mocks on the host.
//!
//! A serial failure never cuts a step short. The step finishes its work
//! (LED update, arbitration, pacing) and hands back what happened together
//! with the first failure it ran into.

pub mod calculator;
pub mod game;

pub use calculator::{Calculator, CalculatorStep};
pub use game::{GameStep, RpsGame, StepEvents, MAX_EVENTS_PER_STEP};

/// Serial failure during a poll step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepError<R, T> {
    /// Reading the receiver failed
    Receive(R),
    /// Writing a diagnostic failed
    Transmit(T),
}

/// Result of one poll step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport<O, R, T> {
    /// What the step did
    pub output: O,
    /// First serial failure of the step, if any
    pub error: Option<StepError<R, T>>,
}

impl<O, R, T> StepReport<O, R, T> {
    pub(crate) fn new(output: O) -> Self {
        Self {
            output,
            error: None,
        }
    }

    /// Keep `result`'s error unless an earlier one is already held
    pub(crate) fn note(&mut self, result: Result<(), StepError<R, T>>) {
        if let Err(error) = result {
            self.error.get_or_insert(error);
        }
    }
}
