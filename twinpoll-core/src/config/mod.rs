//! Configuration types
//!
//! The protocol is fixed, so these are compile-time defaults gathered in
//! one place rather than a runtime configuration surface.

pub mod types;

pub use types::*;
