//! Keypad cell coordinates

/// Number of row lines (inputs)
pub const ROWS: u8 = 4;

/// Number of column lines (outputs)
pub const COLUMNS: u8 = 4;

/// Total number of buttons in the matrix
pub const BUTTON_COUNT: u8 = ROWS * COLUMNS;

/// One button of the 4x4 matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadCell {
    row: u8,
    column: u8,
}

impl KeypadCell {
    /// Create a cell, or `None` if the coordinates fall outside the matrix
    pub fn new(row: u8, column: u8) -> Option<Self> {
        if row < ROWS && column < COLUMNS {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// Cell for a button index (`row * 4 + column`)
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= BUTTON_COUNT {
            return None;
        }
        Some(Self {
            row: index / COLUMNS,
            column: index % COLUMNS,
        })
    }

    /// Row line (0..4)
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column line (0..4)
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Button index in the range 0..16
    pub fn index(&self) -> u8 {
        self.row * COLUMNS + self.column
    }
}
