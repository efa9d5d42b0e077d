//! GPIO keypad matrix
//!
//! Column lines are outputs held high when idle; row lines are inputs with
//! pull-ups. Driving one column low pulls down the row of any button held
//! on that column.

use embedded_hal::digital::{InputPin, OutputPin};
use twinpoll_hal::KeyMatrix;

/// Keypad wired to `C` column outputs and `R` row inputs
///
/// Pin errors are not fatal: a column that fails to drive is skipped by
/// the hardware anyway, and a row that fails to read counts as released.
pub struct GpioKeyMatrix<C, R, const NC: usize, const NR: usize> {
    columns: [C; NC],
    rows: [R; NR],
}

impl<C, R, const NC: usize, const NR: usize> GpioKeyMatrix<C, R, NC, NR>
where
    C: OutputPin,
    R: InputPin,
{
    /// Create a matrix; every column is released
    pub fn new(columns: [C; NC], rows: [R; NR]) -> Self {
        let mut matrix = Self { columns, rows };
        matrix.release_columns();
        matrix
    }

    /// Give back the pins
    pub fn release(self) -> ([C; NC], [R; NR]) {
        (self.columns, self.rows)
    }
}

impl<C, R, const NC: usize, const NR: usize> KeyMatrix for GpioKeyMatrix<C, R, NC, NR>
where
    C: OutputPin,
    R: InputPin,
{
    fn drive_column(&mut self, column: u8) {
        let target = column as usize;
        for (index, pin) in self.columns.iter_mut().enumerate() {
            // Exactly one column low, the rest high
            let _ = if index == target {
                pin.set_low()
            } else {
                pin.set_high()
            };
        }
    }

    fn read_rows(&mut self) -> u8 {
        let mut levels = 0;
        for (row, pin) in self.rows.iter_mut().enumerate().take(8) {
            if pin.is_high().unwrap_or(true) {
                levels |= 1 << row;
            }
        }
        levels
    }

    fn release_columns(&mut self) {
        for pin in self.columns.iter_mut() {
            let _ = pin.set_high();
        }
    }
}
