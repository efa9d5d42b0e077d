//! Board wiring
//!
//! Pin assignments for an RP2040 board (Raspberry Pi Pico layout):
//!
//! | Signal            | GPIO   | Mode                    |
//! |-------------------|--------|-------------------------|
//! | UART0 TX          | 0      | 115200 8N1              |
//! | UART0 RX          | 1      |                         |
//! | Keypad columns 0-3| 2-5    | Output, idle high       |
//! | Keypad rows 0-3   | 6-9    | Input, pull-up          |
//! | Result LED        | 25     | Output, active high     |

use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, BufferedUartTx, Config, Uart};
use static_cell::StaticCell;

use twinpoll_core::keypad::{COLUMNS, ROWS};
use twinpoll_drivers::{GpioKeyMatrix, GpioLedBank, HalDelay, IoRx, IoTx};
use twinpoll_hal::UartConfig;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// UART ring buffer size, each direction
const UART_BUF_SIZE: usize = 256;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

/// Serial receive half
pub type SerialRx = IoRx<BufferedUartRx>;
/// Serial transmit half
pub type SerialTx = IoTx<BufferedUartTx>;
/// 4x4 keypad on GPIO 2-9
pub type Keypad = GpioKeyMatrix<Output<'static>, Input<'static>, { COLUMNS as usize }, { ROWS as usize }>;
/// Single result LED
pub type Leds = GpioLedBank<Output<'static>, 1>;
/// Blocking millisecond delay
pub type Delay = HalDelay<embassy_time::Delay>;

/// Every peripheral the controllers use
pub struct Board {
    pub serial_rx: SerialRx,
    pub serial_tx: SerialTx,
    pub keypad: Keypad,
    pub leds: Leds,
    pub delay: Delay,
}

impl Board {
    /// Initialize the chip and claim the board's pins
    ///
    /// Must be called once; the UART buffers are static.
    pub fn init() -> Self {
        let p = embassy_rp::init(Default::default());

        let mut uart_config = Config::default();
        uart_config.baudrate = UartConfig::default().baudrate;

        let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
        let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);

        let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
        let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
        let (tx, rx) = uart.split();

        let keypad = GpioKeyMatrix::new(
            [
                Output::new(p.PIN_2, Level::High),
                Output::new(p.PIN_3, Level::High),
                Output::new(p.PIN_4, Level::High),
                Output::new(p.PIN_5, Level::High),
            ],
            [
                Input::new(p.PIN_6, Pull::Up),
                Input::new(p.PIN_7, Pull::Up),
                Input::new(p.PIN_8, Pull::Up),
                Input::new(p.PIN_9, Pull::Up),
            ],
        );

        let leds = GpioLedBank::new_active_high([Output::new(p.PIN_25, Level::Low)]);

        Self {
            serial_rx: IoRx::new(rx),
            serial_tx: IoTx::new(tx),
            keypad,
            leds,
            delay: HalDelay::new(embassy_time::Delay),
        }
    }
}
