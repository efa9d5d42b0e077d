//! Keypad matrix scanner
//!
//! Finds the pressed button by multiplexing: each column is driven low in
//! turn and the rows are sampled after a short settling delay. Four column
//! lines and four row lines cover all sixteen buttons, at the cost of one
//! settle period per column.
//!
//! Only one press can be resolved per scan. With several buttons held the
//! lowest column wins, then the lowest row on that column.

use twinpoll_hal::{DelayMs, KeyMatrix};

use super::cell::{KeypadCell, COLUMNS, ROWS};
use crate::config::ScanConfig;

/// Scanner over a keypad matrix
pub struct KeypadScanner<M> {
    matrix: M,
    settle_ms: u32,
}

impl<M: KeyMatrix> KeypadScanner<M> {
    /// Create a scanner; all columns start released (high)
    pub fn new(mut matrix: M, config: &ScanConfig) -> Self {
        matrix.release_columns();
        Self {
            matrix,
            settle_ms: config.settle_ms,
        }
    }

    /// Scan the whole matrix once
    ///
    /// Returns the first active cell, or `None` when no button is down.
    /// Blocks for `settle_ms` on every column visited.
    pub fn scan<D: DelayMs>(&mut self, delay: &mut D) -> Option<KeypadCell> {
        for column in 0..COLUMNS {
            self.matrix.drive_column(column);
            delay.delay_ms(self.settle_ms);

            let rows = self.matrix.read_rows();
            for row in 0..ROWS {
                // Active-low: a pressed key pulls its row down
                if rows & (1 << row) == 0 {
                    return KeypadCell::new(row, column);
                }
            }
        }
        None
    }

    /// Get access to the underlying matrix
    pub fn matrix(&self) -> &M {
        &self.matrix
    }

    /// Get mutable access to the underlying matrix
    pub fn matrix_mut(&mut self) -> &mut M {
        &mut self.matrix
    }

    /// Give back the matrix lines
    pub fn release(self) -> M {
        self.matrix
    }
}
