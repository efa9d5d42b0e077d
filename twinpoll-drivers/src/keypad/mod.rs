//! Keypad matrix implementations

pub mod gpio;

pub use gpio::GpioKeyMatrix;
