//! Rock-paper-scissors between the serial line and the keypad
//!
//! The PC plays by typing `0`, `1` or `2` on UART0; the keypad player
//! presses button 0, 1 or 2.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use twinpoll_core::config::ScanConfig;
use twinpoll_core::RpsGame;
use twinpoll_firmware::board::Board;
use twinpoll_firmware::report;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("twinpoll rock-paper-scissors starting...");

    let board = Board::init();
    let config = ScanConfig::default();
    info!(
        "Board initialized, settle {}ms, poll every {}ms",
        config.settle_ms, config.poll_interval_ms
    );

    // The LED bank is not used by the game; keep it dark
    let _leds = board.leds;

    let mut game = RpsGame::new(
        board.serial_rx,
        board.serial_tx,
        board.keypad,
        board.delay,
        &config,
    );

    match game.start() {
        Ok(event) => report::event(&event),
        Err(e) => warn!("Serial transmit failed: {}", e),
    }

    loop {
        report::step(&game.poll());
    }
}
