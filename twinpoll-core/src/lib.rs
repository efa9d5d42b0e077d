//! Board-agnostic core logic for the twinpoll controllers
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Keypad matrix scanning and press edge detection
//! - Serial expression accumulation
//! - Rock-paper-scissors rules and two-party arbitration
//! - Threshold LED actuation
//! - The calculator and game poll loops, generic over `twinpoll-hal`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod events;
pub mod game;
pub mod keypad;
pub mod serial;

#[cfg(test)]
mod mock;

pub use app::{Calculator, RpsGame, StepError, StepReport};
pub use events::Event;
