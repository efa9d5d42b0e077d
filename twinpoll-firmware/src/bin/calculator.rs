//! Serial calculator
//!
//! Reads `a/b` lines on UART0, answers with the product and lights the
//! result LED when the product is above 100.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use twinpoll_core::config::CalculatorConfig;
use twinpoll_core::Calculator;
use twinpoll_firmware::board::Board;
use twinpoll_firmware::report;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("twinpoll calculator starting...");

    let board = Board::init();
    let config = CalculatorConfig::default();
    info!("Board initialized, LED threshold {}", config.threshold);

    let mut calculator = Calculator::new(board.serial_rx, board.serial_tx, board.leds, &config);

    match calculator.start() {
        Ok(event) => report::event(&event),
        Err(e) => warn!("Serial transmit failed: {}", e),
    }

    loop {
        report::step(&calculator.poll());
    }
}
