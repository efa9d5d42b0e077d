//! Millisecond delay over `embedded-hal`

use embedded_hal::delay::DelayNs;
use twinpoll_hal::DelayMs;

/// Adapts any [`DelayNs`] source (such as `embassy_time::Delay`)
pub struct HalDelay<D> {
    inner: D,
}

impl<D: DelayNs> HalDelay<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Give back the wrapped delay
    pub fn release(self) -> D {
        self.inner
    }
}

impl<D: DelayNs> DelayMs for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        DelayNs::delay_ms(&mut self.inner, ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingDelay {
        total_ns: u64,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn test_forwards_milliseconds() {
        let mut delay = HalDelay::new(RecordingDelay::default());
        DelayMs::delay_ms(&mut delay, 10);
        DelayMs::delay_ms(&mut delay, 1);
        assert_eq!(delay.release().total_ns, 11_000_000);
    }
}
