//! Twinpoll Hardware Abstraction Layer
//!
//! This crate defines the capabilities the controller logic needs from the
//! board. Chip-specific code (or the generic adapters in `twinpoll-drivers`)
//! implements them, so the same control loops run on hardware and under
//! host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (twinpoll-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  twinpoll-core (state machines)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  twinpoll-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  twinpoll-drivers (embedded-hal / io)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPort`] - Word-wide output (LED bank)
//! - [`matrix::KeyMatrix`] - Column-drive / row-sense keypad lines
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication
//! - [`delay::DelayMs`] - Busy-wait delay

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod matrix;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPort;
pub use matrix::KeyMatrix;
pub use uart::{UartConfig, UartRx, UartTx};
