//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in twinpoll-hal on top of the `embedded-hal` 1.0 and `embedded-io`
//! ecosystem traits, so any chip HAL that implements those can run the
//! controllers:
//!
//! - LED banks on GPIO output pins
//! - Keypad matrices on GPIO column outputs and row inputs
//! - Millisecond delays over `DelayNs`
//! - Non-blocking serial receive and blocking transmit

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod keypad;
pub mod led;
pub mod serial;

pub use delay::HalDelay;
pub use keypad::GpioKeyMatrix;
pub use led::GpioLedBank;
pub use serial::{IoRx, IoTx, SerialError};
