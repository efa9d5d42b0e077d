//! twinpoll firmware support for RP2040 boards
//!
//! Shared by the `calculator` and `rps` binaries:
//!
//! - [`board`]: pin map and peripheral setup
//! - [`report`]: defmt logging of controller events and failures

#![no_std]

pub mod board;
pub mod report;
