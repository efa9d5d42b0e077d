//! GPIO LED bank
//!
//! A fixed group of LEDs, one `embedded-hal` output pin each, exposed as a
//! single [`OutputPort`] word. Bit `n` of the mask drives `pins[n]`.

use embedded_hal::digital::OutputPin;
use twinpoll_hal::OutputPort;

/// LED bank over `N` output pins
///
/// The bank can be wired active-high (default) or active-low. Pin write
/// errors are ignored; `current()` reports the mask that was requested.
pub struct GpioLedBank<P, const N: usize> {
    pins: [P; N],
    /// If true, LED on = pin LOW
    inverted: bool,
    /// Last mask written
    mask: u32,
}

impl<P: OutputPin, const N: usize> GpioLedBank<P, N> {
    /// Create a new LED bank
    ///
    /// # Arguments
    /// - `pins`: One pin per LED, bit 0 first
    /// - `inverted`: If true, an LED is lit when its pin is LOW
    pub fn new(pins: [P; N], inverted: bool) -> Self {
        let mut bank = Self {
            pins,
            inverted,
            mask: 0,
        };
        // Ensure every LED starts off
        bank.write(0);
        bank
    }

    /// Create a bank of LEDs lit by a high pin
    pub fn new_active_high(pins: [P; N]) -> Self {
        Self::new(pins, false)
    }

    /// Create a bank of LEDs lit by a low pin
    pub fn new_active_low(pins: [P; N]) -> Self {
        Self::new(pins, true)
    }

    /// Give back the pins
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> OutputPort for GpioLedBank<P, N> {
    fn width(&self) -> u8 {
        N.min(32) as u8
    }

    fn write(&mut self, mask: u32) {
        let mask = mask & self.all_on_mask();
        self.mask = mask;

        for (bit, pin) in self.pins.iter_mut().take(32).enumerate() {
            let on = mask & (1 << bit) != 0;
            // Normal: on=true, inverted=false → high
            // Inverted: on=true, inverted=true → low
            let _ = if on != self.inverted {
                pin.set_high()
            } else {
                pin.set_low()
            };
        }
    }

    fn current(&self) -> u32 {
        self.mask
    }
}
