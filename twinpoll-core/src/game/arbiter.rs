//! Two-party round arbitration
//!
//! Each party fills its own slot whenever its input arrives, in any order.
//! The round resolves only once both slots are filled, and both are
//! cleared together so a round can never be half reset.
//!
//! ```text
//!   A: Empty ──submit_a──▶ Filled ─┐
//!                                  ├─ try_resolve ──▶ outcome, both Empty
//!   B: Empty ──submit_b──▶ Filled ─┘
//! ```

use super::choice::{Choice, Verdict};

/// Which side of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Party {
    /// Serial line player
    A,
    /// Keypad player
    B,
}

/// A resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundOutcome {
    pub party_a: Choice,
    pub party_b: Choice,
    pub verdict: Verdict,
}

impl RoundOutcome {
    /// Winning party and its move, or `None` on a tie
    pub fn winner(&self) -> Option<(Party, Choice)> {
        match self.verdict {
            Verdict::Tie => None,
            Verdict::AWins => Some((Party::A, self.party_a)),
            Verdict::BWins => Some((Party::B, self.party_b)),
        }
    }
}

/// Pending choices for one round
#[derive(Debug, Clone, Default)]
pub struct Arbiter {
    slot_a: Option<Choice>,
    slot_b: Option<Choice>,
}

impl Arbiter {
    /// Create an arbiter with both slots empty
    pub fn new() -> Self {
        Self {
            slot_a: None,
            slot_b: None,
        }
    }

    /// Record party A's move
    ///
    /// Returns false (and keeps the first move) if A already chose.
    pub fn submit_a(&mut self, choice: Choice) -> bool {
        fill(&mut self.slot_a, choice)
    }

    /// Record party B's move
    ///
    /// Returns false (and keeps the first move) if B already chose.
    pub fn submit_b(&mut self, choice: Choice) -> bool {
        fill(&mut self.slot_b, choice)
    }

    /// Record a move for either party
    pub fn submit(&mut self, party: Party, choice: Choice) -> bool {
        match party {
            Party::A => self.submit_a(choice),
            Party::B => self.submit_b(choice),
        }
    }

    /// True if `party` still has to choose
    pub fn is_waiting_for(&self, party: Party) -> bool {
        match party {
            Party::A => self.slot_a.is_none(),
            Party::B => self.slot_b.is_none(),
        }
    }

    /// Party A's pending move
    pub fn pending_a(&self) -> Option<Choice> {
        self.slot_a
    }

    /// Party B's pending move
    pub fn pending_b(&self) -> Option<Choice> {
        self.slot_b
    }

    /// Resolve the round if both parties have chosen
    ///
    /// On success both slots are cleared.
    pub fn try_resolve(&mut self) -> Option<RoundOutcome> {
        let (a, b) = (self.slot_a?, self.slot_b?);

        self.slot_a = None;
        self.slot_b = None;

        Some(RoundOutcome {
            party_a: a,
            party_b: b,
            verdict: Verdict::decide(a, b),
        })
    }
}

fn fill(slot: &mut Option<Choice>, choice: Choice) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(choice);
    true
}
