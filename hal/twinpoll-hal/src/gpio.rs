//! GPIO port abstractions
//!
//! Boards often expose a bank of outputs (LEDs, relays) as one register
//! word rather than individual pins. This trait models that view.

/// Word-wide digital output port
///
/// Bit `n` of the mask drives output line `n`; a set bit means the line
/// is asserted (LED on), whatever the electrical polarity of the board.
pub trait OutputPort {
    /// Number of output lines in this port
    fn width(&self) -> u8;

    /// Write all lines at once
    fn write(&mut self, mask: u32);

    /// Last mask written to the port
    fn current(&self) -> u32;

    /// Mask with every line of this port asserted
    fn all_on_mask(&self) -> u32 {
        match self.width() {
            0 => 0,
            w if w >= 32 => u32::MAX,
            w => (1u32 << w) - 1,
        }
    }

    /// Assert every line
    fn set_all(&mut self) {
        let mask = self.all_on_mask();
        self.write(mask);
    }

    /// Release every line
    fn clear_all(&mut self) {
        self.write(0);
    }
}
