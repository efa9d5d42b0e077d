//! Rock-paper-scissors moves and verdicts

/// A move
///
/// The discriminant is the wire value: the ASCII digit on the serial line
/// and the button index on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Choice {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    /// All moves in index order
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Move for an index in 0..3
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Choice::Rock),
            1 => Some(Choice::Paper),
            2 => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// Move for a serial byte (`'0'`, `'1'` or `'2'`)
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'0'..=b'2' => Self::from_index(byte - b'0'),
            _ => None,
        }
    }

    /// Move for a keypad button index; buttons 3..16 are not moves
    pub fn from_button(index: u8) -> Option<Self> {
        Self::from_index(index)
    }

    /// Numeric index (0..3)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Lowercase name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// True if this move beats `other`
    ///
    /// Index `i` beats index `(i + 2) % 3`.
    pub fn beats(self, other: Choice) -> bool {
        (self.index() + 2) % 3 == other.index()
    }
}

/// Result of a round from party A's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    Tie,
    AWins,
    BWins,
}

impl Verdict {
    /// Decide a round
    pub fn decide(a: Choice, b: Choice) -> Self {
        if a == b {
            Verdict::Tie
        } else if a.beats(b) {
            Verdict::AWins
        } else {
            Verdict::BWins
        }
    }

    /// Same verdict seen with the parties swapped
    pub fn flip(self) -> Self {
        match self {
            Verdict::Tie => Verdict::Tie,
            Verdict::AWins => Verdict::BWins,
            Verdict::BWins => Verdict::AWins,
        }
    }
}
