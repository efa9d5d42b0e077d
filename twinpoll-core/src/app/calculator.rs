//! Serial calculator
//!
//! Reads `a/b` expressions from the serial line, writes back the product
//! and lights the LED bank when the product passes the threshold.

use twinpoll_hal::{OutputPort, UartRx, UartTx};

use super::{StepError, StepReport};
use crate::actuator::LedActuator;
use crate::config::CalculatorConfig;
use crate::diagnostics;
use crate::events::Event;
use crate::serial::ExpressionAccumulator;

/// Result of one calculator step
pub type CalculatorStep<R, T> = StepReport<Option<Event>, <R as UartRx>::Error, <T as UartTx>::Error>;

/// Calculator program state
pub struct Calculator<R, T, P> {
    rx: R,
    tx: T,
    actuator: LedActuator<P>,
    accumulator: ExpressionAccumulator,
}

impl<R: UartRx, T: UartTx, P: OutputPort> Calculator<R, T, P> {
    /// Create the calculator; the LED bank is switched off here
    pub fn new(rx: R, tx: T, leds: P, config: &CalculatorConfig) -> Self {
        Self {
            rx,
            tx,
            actuator: LedActuator::new(leds, config),
            accumulator: ExpressionAccumulator::new(),
        }
    }

    /// Write the first prompt
    pub fn start(&mut self) -> Result<Event, T::Error> {
        self.tx.write_str(diagnostics::PROMPT)?;
        Ok(Event::Prompted)
    }

    /// Handle at most one received byte
    ///
    /// The output is `None` when nothing arrived or the byte only advanced
    /// the expression in progress. The LED bank is updated before any
    /// diagnostic is written.
    pub fn poll(&mut self) -> CalculatorStep<R, T> {
        let mut step = StepReport::new(None);

        let byte = match self.rx.try_read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return step,
            Err(e) => {
                step.note(Err(StepError::Receive(e)));
                return step;
            }
        };

        match self.accumulator.feed(byte) {
            Ok(None) => {}
            Ok(Some(expression)) => {
                let product = expression.product();
                let lit = self.actuator.actuate(product);
                step.output = Some(Event::ProductComputed {
                    expression,
                    product,
                    lit,
                });

                step.note(self.send(&diagnostics::product_line(product)));
                step.note(self.send(diagnostics::PROMPT));
            }
            Err(error) => {
                step.output = Some(Event::InputRejected(error));

                step.note(self.send(diagnostics::rejection(error)));
                step.note(self.send(diagnostics::PROMPT));
            }
        }
        step
    }

    /// Expression state, for inspection
    pub fn accumulator(&self) -> &ExpressionAccumulator {
        &self.accumulator
    }

    /// LED bank
    pub fn leds(&self) -> &P {
        self.actuator.port()
    }

    /// Get access to the transmitter
    pub fn tx_mut(&mut self) -> &mut T {
        &mut self.tx
    }

    /// Get access to the receiver
    pub fn rx_mut(&mut self) -> &mut R {
        &mut self.rx
    }

    fn send(&mut self, text: &str) -> Result<(), StepError<R::Error, T::Error>> {
        self.tx.write_str(text).map_err(StepError::Transmit)
    }
}
