//! Keypad matrix lines
//!
//! A keypad matrix exposes N column outputs and M row inputs. Pressing a key
//! connects its column to its row, so driving one column low and reading
//! the rows reveals which keys on that column are down.

/// Column-drive / row-sense access to a keypad matrix
///
/// Both sides are active-low: the selected column is driven low and a
/// pressed key pulls its row line low against the pull-up.
pub trait KeyMatrix {
    /// Drive `column` low and every other column high
    fn drive_column(&mut self, column: u8);

    /// Read the row lines as a bitmask
    ///
    /// Bit `r` is the electrical level of row `r` (1 = high, 0 = low).
    fn read_rows(&mut self) -> u8;

    /// Drive every column high (no column selected)
    fn release_columns(&mut self);
}
