//! Matrix keypad input
//!
//! Raw scanning and press edge detection for the 4x4 keypad.

pub mod cell;
pub mod debounce;
pub mod scanner;

pub use cell::{KeypadCell, BUTTON_COUNT, COLUMNS, ROWS};
pub use debounce::EdgeDetector;
pub use scanner::KeypadScanner;
