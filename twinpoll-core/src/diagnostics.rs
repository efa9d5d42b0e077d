//! Text written back over the serial line
//!
//! Fixed messages are constants; lines that carry values are formatted into
//! a bounded [`Line`] so nothing here needs an allocator.

use core::fmt::Write;

use heapless::String;

use crate::game::{Choice, Party, RoundOutcome, Verdict};
use crate::serial::AccumulatorError;

/// Longest formatted line, terminator included
pub const LINE_CAPACITY: usize = 48;

/// A formatted diagnostic line
pub type Line = String<LINE_CAPACITY>;

/// Operand prompt
pub const PROMPT: &str = "Enter num1/num2: \r\n";

/// Written when a byte outside the expression grammar arrives
pub const INVALID_CHAR: &str = "Invalid char. Reset.\r\n";

/// Written when an operand stops fitting in 32 bits
pub const NUMBER_TOO_LARGE: &str = "Number too large. Reset.\r\n";

/// Game banner, written once at start
pub const GAME_BANNER: [&str; 3] = [
    "\r\n=== Rock-Paper-Scissors Game ===\r\n",
    "PC: Enter 0=rock, 1=paper, 2=scissors\r\n",
    "Keypad: Press button 0, 1, or 2\r\n",
];

/// Written whenever a fresh round opens
pub const WAITING_FOR_PC: &str = "Waiting for PC choice...\r\n";

/// Follows every serial choice
pub const WAITING_FOR_KEYPAD: &str = "Waiting for Keypad choice...\r\n";

/// Separator between rounds
pub const NEXT_ROUND: &str = "\r\n--- Next Round ---\r\n";

/// Label a party uses in game output
pub fn party_name(party: Party) -> &'static str {
    match party {
        Party::A => "PC",
        Party::B => "Keypad",
    }
}

/// Message for a rejected expression
pub fn rejection(error: AccumulatorError) -> &'static str {
    match error {
        AccumulatorError::InvalidSymbol(_) => INVALID_CHAR,
        AccumulatorError::Overflow => NUMBER_TOO_LARGE,
    }
}

/// `Product: <value>`
pub fn product_line(product: u64) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "Product: {}\r\n", product);
    line
}

/// `<party> chose <index> (<name>).`
pub fn choice_line(party: Party, choice: Choice) -> Line {
    let mut line = Line::new();
    let _ = write!(
        line,
        "{} chose {} ({}).\r\n",
        party_name(party),
        choice.index(),
        choice.name()
    );
    line
}

/// Verdict line, the winner's move first
pub fn outcome_line(outcome: &RoundOutcome) -> Line {
    let (a, b) = (outcome.party_a.name(), outcome.party_b.name());
    let mut line = Line::new();
    let _ = match outcome.verdict {
        Verdict::Tie => write!(line, "Tie! Both chose {}\r\n", a),
        Verdict::AWins => write!(line, "{} won! {} > {}\r\n", party_name(Party::A), a, b),
        Verdict::BWins => write!(line, "{} won! {} > {}\r\n", party_name(Party::B), b, a),
    };
    line
}
