//! Threshold-driven LED actuator
//!
//! Maps a computed product onto the LED bank: every LED on when the product
//! is above the configured threshold, every LED off otherwise. The mapping
//! itself is a pure function so it can be checked without hardware.

use twinpoll_hal::OutputPort;

use crate::config::CalculatorConfig;

/// True if `product` should light the bank
pub fn is_above_threshold(product: u64, threshold: u64) -> bool {
    product > threshold
}

/// Drives an output port from products
pub struct LedActuator<P> {
    port: P,
    threshold: u64,
}

impl<P: OutputPort> LedActuator<P> {
    /// Take the port and switch every LED off
    pub fn new(mut port: P, config: &CalculatorConfig) -> Self {
        port.clear_all();
        Self {
            port,
            threshold: config.threshold,
        }
    }

    /// Update the bank for a new product
    ///
    /// Returns whether the bank is now lit.
    pub fn actuate(&mut self, product: u64) -> bool {
        let lit = is_above_threshold(product, self.threshold);
        if lit {
            self.port.set_all();
        } else {
            self.port.clear_all();
        }
        lit
    }

    /// Configured threshold
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Get access to the port
    pub fn port(&self) -> &P {
        &self.port
    }
}
