//! Mock hardware that implements the `twinpoll-hal` traits without any
//! real peripherals, for host tests.

use std::collections::VecDeque;
use std::string::String;

use twinpoll_hal::{DelayMs, KeyMatrix, OutputPort, UartRx, UartTx};

use crate::keypad::{COLUMNS, ROWS};

/// Keypad matrix with a set of held buttons, wired active-low
pub struct MockMatrix {
    /// Bit `row * 4 + column` set while that button is held
    pub held: u16,
    /// Column currently driven low
    pub driven: Option<u8>,
    /// Every column driven, in order
    pub drive_log: std::vec::Vec<u8>,
}

impl MockMatrix {
    pub fn new() -> Self {
        Self {
            held: 0,
            driven: None,
            drive_log: std::vec::Vec::new(),
        }
    }

    pub fn press(&mut self, row: u8, column: u8) {
        self.held |= 1 << (row * COLUMNS + column);
    }

    pub fn release_all(&mut self) {
        self.held = 0;
    }
}

impl KeyMatrix for MockMatrix {
    fn drive_column(&mut self, column: u8) {
        self.driven = Some(column);
        self.drive_log.push(column);
    }

    fn read_rows(&mut self) -> u8 {
        let mut rows = 0x0F;
        if let Some(column) = self.driven {
            for row in 0..ROWS {
                if self.held & (1 << (row * COLUMNS + column)) != 0 {
                    rows &= !(1 << row);
                }
            }
        }
        rows
    }

    fn release_columns(&mut self) {
        self.driven = None;
    }
}

/// Delay that only counts
#[derive(Default)]
pub struct MockDelay {
    pub total_ms: u32,
    pub calls: u32,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayMs for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms;
        self.calls += 1;
    }
}

/// Receiver fed from a queue of bytes
#[derive(Default)]
pub struct MockRx {
    pub pending: VecDeque<u8>,
    /// Fail the next read
    pub fail_next: bool,
}

impl MockRx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, text: &str) {
        self.pending.extend(text.bytes());
    }
}

impl UartRx for MockRx {
    type Error = ();

    fn try_read_byte(&mut self) -> Result<Option<u8>, ()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(());
        }
        Ok(self.pending.pop_front())
    }
}

/// Transmitter that records everything written
#[derive(Default)]
pub struct MockTx {
    pub output: String,
    /// Fail the next write
    pub fail_next: bool,
    /// Fail every write
    pub disconnected: bool,
}

impl MockTx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the text written so far
    pub fn take(&mut self) -> String {
        core::mem::take(&mut self.output)
    }
}

impl UartTx for MockTx {
    type Error = ();

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
        if self.disconnected {
            return Err(());
        }
        if self.fail_next {
            self.fail_next = false;
            return Err(());
        }
        self.output.push_str(core::str::from_utf8(data).map_err(|_| ())?);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

/// Output port that remembers writes
pub struct MockPort {
    pub width: u8,
    pub mask: u32,
    pub writes: u32,
}

impl MockPort {
    pub fn new(width: u8) -> Self {
        Self {
            width,
            mask: 0xDEAD,
            writes: 0,
        }
    }
}

impl OutputPort for MockPort {
    fn width(&self) -> u8 {
        self.width
    }

    fn write(&mut self, mask: u32) {
        self.mask = mask;
        self.writes += 1;
    }

    fn current(&self) -> u32 {
        self.mask
    }
}
