//! UART serial communication abstractions
//!
//! Provides traits for polled serial communication that can be
//! implemented by chip-specific HALs.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write a text line (the caller supplies any line ending)
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write_blocking(text.as_bytes())
    }
}

/// UART receiver
///
/// Non-blocking: the control loops poll this once per iteration and must
/// never stall waiting for a byte.
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Take one byte if one has arrived
    ///
    /// Returns `Ok(None)` when the receive buffer is empty.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// UART configuration
///
/// Only the baud rate varies between boards; the frame format is always
/// 8 data bits, no parity, one stop bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self { baudrate: 115200 }
    }
}
