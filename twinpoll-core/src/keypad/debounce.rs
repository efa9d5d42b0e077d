//! Press edge detection
//!
//! The scanner reports the level of the matrix: a held button shows up on
//! every scan. This turns that level into edges, one event per press.
//!
//! This is change detection, not a time-based debouncer. Chatter between
//! two scans is not filtered; the scanner's settle delay is the only
//! mitigation against contact bounce.

use super::cell::KeypadCell;

/// Edge detector over scanner output
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    last_reported: Option<KeypadCell>,
}

impl EdgeDetector {
    /// Create a detector with nothing held
    pub fn new() -> Self {
        Self {
            last_reported: None,
        }
    }

    /// Feed one scan result
    ///
    /// Returns the cell when a new press is seen. A held button or a release
    /// produces nothing; the release re-arms the detector for the next press.
    pub fn detect(&mut self, current: Option<KeypadCell>) -> Option<KeypadCell> {
        if current == self.last_reported {
            return None;
        }

        self.last_reported = current;
        current
    }

    /// Forget the last state (round boundary)
    pub fn reset(&mut self) {
        self.last_reported = None;
    }
}
