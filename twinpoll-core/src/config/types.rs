//! Configuration type definitions

/// Settling time after driving a keypad column (ms)
pub const DEFAULT_SETTLE_MS: u32 = 1;

/// Pause at the end of each game loop iteration (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;

/// Product above which the calculator lights the LED bank
pub const DEFAULT_PRODUCT_THRESHOLD: u64 = 100;

/// Keypad scan timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    /// Delay between driving a column and reading the rows
    pub settle_ms: u32,
    /// Delay between control loop iterations
    pub poll_interval_ms: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            settle_ms: DEFAULT_SETTLE_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// Calculator output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalculatorConfig {
    /// Products strictly greater than this turn the LED bank on
    pub threshold: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PRODUCT_THRESHOLD,
        }
    }
}
