//! Rock-paper-scissors between the serial line and the keypad
//!
//! Party A types `0`, `1` or `2` on the serial line, party B presses keypad
//! button 0, 1 or 2. Each step polls only the sources whose party has not
//! chosen yet, resolves the round once both moves are in, then sleeps for
//! the poll interval.

use heapless::Vec;
use twinpoll_hal::{DelayMs, KeyMatrix, UartRx, UartTx};

use super::{StepError, StepReport};
use crate::config::ScanConfig;
use crate::diagnostics;
use crate::events::Event;
use crate::game::{Arbiter, Choice, Party};
use crate::keypad::{EdgeDetector, KeypadScanner};

/// Most events a single step can produce: two choices and a verdict
pub const MAX_EVENTS_PER_STEP: usize = 3;

/// Events from one poll step, in the order they happened
pub type StepEvents = Vec<Event, MAX_EVENTS_PER_STEP>;

/// Result of one game step
pub type GameStep<R, T> = StepReport<StepEvents, <R as UartRx>::Error, <T as UartTx>::Error>;

/// Game program state
pub struct RpsGame<R, T, M, D> {
    rx: R,
    tx: T,
    scanner: KeypadScanner<M>,
    detector: EdgeDetector,
    arbiter: Arbiter,
    delay: D,
    poll_interval_ms: u32,
}

impl<R, T, M, D> RpsGame<R, T, M, D>
where
    R: UartRx,
    T: UartTx,
    M: KeyMatrix,
    D: DelayMs,
{
    /// Create the game with both slots empty
    pub fn new(rx: R, tx: T, matrix: M, delay: D, config: &ScanConfig) -> Self {
        Self {
            rx,
            tx,
            scanner: KeypadScanner::new(matrix, config),
            detector: EdgeDetector::new(),
            arbiter: Arbiter::new(),
            delay,
            poll_interval_ms: config.poll_interval_ms,
        }
    }

    /// Write the banner and open the first round
    pub fn start(&mut self) -> Result<Event, T::Error> {
        for line in diagnostics::GAME_BANNER {
            self.tx.write_str(line)?;
        }
        self.tx.write_str(diagnostics::WAITING_FOR_PC)?;
        Ok(Event::RoundStarted)
    }

    /// Run one iteration of the game loop
    ///
    /// Serial failures are reported in the step but change neither the
    /// round nor the pacing.
    pub fn poll(&mut self) -> GameStep<R, T> {
        let mut step = StepReport::new(StepEvents::new());

        if self.arbiter.is_waiting_for(Party::A) {
            match self.rx.try_read_byte() {
                // Bytes other than a move are consumed and dropped
                Ok(byte) => {
                    if let Some(choice) = byte.and_then(Choice::from_ascii) {
                        self.record(Party::A, choice, &mut step);
                    }
                }
                Err(e) => step.note(Err(StepError::Receive(e))),
            }
        }

        if self.arbiter.is_waiting_for(Party::B) {
            let held = self.scanner.scan(&mut self.delay);
            if let Some(cell) = self.detector.detect(held) {
                match Choice::from_button(cell.index()) {
                    Some(choice) => self.record(Party::B, choice, &mut step),
                    None => {
                        let _ = step.output.push(Event::KeyIgnored(cell));
                    }
                }
            }
        }

        if let Some(outcome) = self.arbiter.try_resolve() {
            // A key still held from this round counts as a new press next round
            self.detector.reset();
            let _ = step.output.push(Event::RoundResolved(outcome));

            step.note(self.send(&diagnostics::outcome_line(&outcome)));
            step.note(self.send(diagnostics::NEXT_ROUND));
            step.note(self.send(diagnostics::WAITING_FOR_PC));
        }

        self.delay.delay_ms(self.poll_interval_ms);
        step
    }

    /// Pending moves and round state
    pub fn arbiter(&self) -> &Arbiter {
        &self.arbiter
    }

    /// Get access to the keypad matrix
    pub fn matrix_mut(&mut self) -> &mut M {
        self.scanner.matrix_mut()
    }

    /// Get access to the transmitter
    pub fn tx_mut(&mut self) -> &mut T {
        &mut self.tx
    }

    /// Get access to the receiver
    pub fn rx_mut(&mut self) -> &mut R {
        &mut self.rx
    }

    /// Get access to the delay source
    pub fn delay(&self) -> &D {
        &self.delay
    }

    fn record(&mut self, party: Party, choice: Choice, step: &mut GameStep<R, T>) {
        if !self.arbiter.submit(party, choice) {
            return;
        }
        let _ = step.output.push(Event::ChoiceRecorded { party, choice });

        step.note(self.send(&diagnostics::choice_line(party, choice)));
        if party == Party::A {
            step.note(self.send(diagnostics::WAITING_FOR_KEYPAD));
        }
    }

    fn send(&mut self, text: &str) -> Result<(), StepError<R::Error, T::Error>> {
        self.tx.write_str(text).map_err(StepError::Transmit)
    }
}
