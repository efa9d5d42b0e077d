//! Serial line over `embedded-io`
//!
//! The receive half must report readiness so a poll never blocks waiting
//! for a byte; buffered UART drivers (such as embassy-rp's
//! `BufferedUartRx`) provide exactly that.

use embedded_io::{ErrorKind, Read, ReadReady, Write};
use twinpoll_hal::{UartRx, UartTx};

/// Serial failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Received data was corrupt (framing, parity, break)
    InvalidData,
    /// The transmitter accepted zero bytes
    WriteZero,
    /// Operation timed out
    TimedOut,
    /// Anything else the driver reported
    Other,
}

impl From<ErrorKind> for SerialError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidData => SerialError::InvalidData,
            ErrorKind::WriteZero => SerialError::WriteZero,
            ErrorKind::TimedOut => SerialError::TimedOut,
            _ => SerialError::Other,
        }
    }
}

fn to_serial_error<E: embedded_io::Error>(error: E) -> SerialError {
    SerialError::from(error.kind())
}

/// Receive half
pub struct IoRx<S> {
    inner: S,
}

impl<S: Read + ReadReady> IoRx<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Get access to the wrapped reader
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

impl<S: Read + ReadReady> UartRx for IoRx<S> {
    type Error = SerialError;

    fn try_read_byte(&mut self) -> Result<Option<u8>, SerialError> {
        if !self.inner.read_ready().map_err(to_serial_error)? {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        let read = self.inner.read(&mut byte).map_err(to_serial_error)?;
        Ok((read == 1).then_some(byte[0]))
    }
}

/// Transmit half
pub struct IoTx<S> {
    inner: S,
}

impl<S: Write> IoTx<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Get access to the wrapped writer
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

impl<S: Write> UartTx for IoTx<S> {
    type Error = SerialError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), SerialError> {
        self.inner.write_all(data).map_err(to_serial_error)
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        self.inner.flush().map_err(to_serial_error)
    }
}
