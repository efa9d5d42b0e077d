//! Blocking delays
//!
//! The control loops have no scheduler; the only way they wait is a
//! fixed busy-wait. Injecting it as a trait lets tests skip real time.

/// Busy-wait delay source
pub trait DelayMs {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
