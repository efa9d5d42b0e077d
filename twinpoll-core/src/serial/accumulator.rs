//! Two-operand expression accumulator
//!
//! Collects `digits '/' digits` one byte at a time from the serial line and
//! yields the pair of operands when a line terminator arrives.
//!
//! Accepted grammar:
//! ```text
//! expression := digit* '/' digit+ ('\r' | '\n')
//! ```
//!
//! Any byte outside the grammar discards the partial expression. A
//! terminator before a usable second operand is dropped without error, so
//! the `\n` of a `\r\n` pair is harmless.

/// Operand separator
pub const DELIMITER: u8 = b'/';

/// Errors that discard the expression in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccumulatorError {
    /// Byte not allowed at this point of the expression
    InvalidSymbol(u8),
    /// Operand no longer fits in a `u32`
    Overflow,
}

/// Which operand digits currently go into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Before the delimiter
    #[default]
    CollectingFirst,
    /// After the delimiter
    CollectingSecond,
}

/// A terminated, valid expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CompletedExpression {
    /// Operand before the delimiter
    pub value_a: u32,
    /// Operand after the delimiter (never zero)
    pub value_b: u32,
}

impl CompletedExpression {
    /// Product of the operands, widened so it cannot overflow
    pub fn product(&self) -> u64 {
        self.value_a as u64 * self.value_b as u64
    }
}

/// Byte-at-a-time accumulator state
#[derive(Debug, Clone, Default)]
pub struct ExpressionAccumulator {
    value_a: u32,
    value_b: u32,
    phase: Phase,
}

impl ExpressionAccumulator {
    /// Create an accumulator in its initial state
    pub fn new() -> Self {
        Self {
            value_a: 0,
            value_b: 0,
            phase: Phase::CollectingFirst,
        }
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.value_a = 0;
        self.value_b = 0;
        self.phase = Phase::CollectingFirst;
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// First operand collected so far
    pub fn value_a(&self) -> u32 {
        self.value_a
    }

    /// Second operand collected so far
    pub fn value_b(&self) -> u32 {
        self.value_b
    }

    /// True when nothing has been collected
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::CollectingFirst && self.value_a == 0
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(expr))` on a terminator that completes a valid
    /// expression, `Ok(None)` while collecting (or when an incomplete
    /// expression is dropped), and `Err` when the byte is rejected. The
    /// state is back to initial after anything but `Ok(None)` mid-collection.
    pub fn feed(&mut self, symbol: u8) -> Result<Option<CompletedExpression>, AccumulatorError> {
        if symbol == b'\r' || symbol == b'\n' {
            let completed = match self.phase {
                Phase::CollectingSecond if self.value_b > 0 => Some(CompletedExpression {
                    value_a: self.value_a,
                    value_b: self.value_b,
                }),
                _ => None,
            };
            self.reset();
            return Ok(completed);
        }

        let result = match (self.phase, symbol) {
            (Phase::CollectingFirst, b'0'..=b'9') => {
                push_digit(self.value_a, symbol).map(|v| self.value_a = v)
            }
            (Phase::CollectingFirst, DELIMITER) => {
                self.phase = Phase::CollectingSecond;
                Ok(())
            }
            (Phase::CollectingSecond, b'0'..=b'9') => {
                push_digit(self.value_b, symbol).map(|v| self.value_b = v)
            }
            _ => Err(AccumulatorError::InvalidSymbol(symbol)),
        };

        match result {
            Ok(()) => Ok(None),
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }
}

/// `value * 10 + digit`, checked
fn push_digit(value: u32, symbol: u8) -> Result<u32, AccumulatorError> {
    value
        .checked_mul(10)
        .and_then(|v| v.checked_add((symbol - b'0') as u32))
        .ok_or(AccumulatorError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Feed `text` until an expression completes or a byte is rejected
    fn feed_str(
        acc: &mut ExpressionAccumulator,
        text: &str,
    ) -> Result<Option<CompletedExpression>, AccumulatorError> {
        for byte in text.bytes() {
            if let Some(expr) = acc.feed(byte)? {
                return Ok(Some(expr));
            }
        }
        Ok(None)
    }

    #[test]
    fn test_simple_expression() {
        let mut acc = ExpressionAccumulator::new();
        let expr = feed_str(&mut acc, "12/5\r").unwrap().unwrap();

        assert_eq!(expr, CompletedExpression { value_a: 12, value_b: 5 });
        assert_eq!(expr.product(), 60);
        assert!(acc.is_idle());
    }

    #[test]
    fn test_newline_terminator() {
        let mut acc = ExpressionAccumulator::new();
        let expr = feed_str(&mut acc, "20/6\n").unwrap().unwrap();
        assert_eq!(expr.product(), 120);
    }

    #[test]
    fn test_crlf_second_terminator_ignored() {
        let mut acc = ExpressionAccumulator::new();
        assert!(feed_str(&mut acc, "3/4\r").unwrap().is_some());
        assert_eq!(acc.feed(b'\n'), Ok(None));
        assert!(acc.is_idle());
    }

    #[test]
    fn test_phase_tracking() {
        let mut acc = ExpressionAccumulator::new();
        acc.feed(b'7').unwrap();
        assert_eq!(acc.phase(), Phase::CollectingFirst);
        assert_eq!(acc.value_a(), 7);

        acc.feed(b'/').unwrap();
        assert_eq!(acc.phase(), Phase::CollectingSecond);

        acc.feed(b'4').unwrap();
        acc.feed(b'2').unwrap();
        assert_eq!(acc.value_b(), 42);
    }

    #[test]
    fn test_terminator_in_first_phase_discards() {
        let mut acc = ExpressionAccumulator::new();
        assert_eq!(feed_str(&mut acc, "123\r"), Ok(None));
        assert!(acc.is_idle());
    }

    #[test]
    fn test_zero_second_operand_discards() {
        let mut acc = ExpressionAccumulator::new();
        assert_eq!(feed_str(&mut acc, "12/0\r"), Ok(None));
        assert!(acc.is_idle());

        assert_eq!(feed_str(&mut acc, "12/\n"), Ok(None));
        assert!(acc.is_idle());
    }

    #[test]
    fn test_empty_first_operand() {
        let mut acc = ExpressionAccumulator::new();
        let expr = feed_str(&mut acc, "/9\r").unwrap().unwrap();
        assert_eq!(expr, CompletedExpression { value_a: 0, value_b: 9 });
    }

    #[test]
    fn test_invalid_symbol_resets() {
        let mut acc = ExpressionAccumulator::new();
        assert_eq!(feed_str(&mut acc, "12a"), Err(AccumulatorError::InvalidSymbol(b'a')));
        assert!(acc.is_idle());

        // Input after the reset starts a fresh expression
        let expr = feed_str(&mut acc, "2/3\r").unwrap().unwrap();
        assert_eq!(expr.product(), 6);
    }

    #[test]
    fn test_second_delimiter_is_invalid() {
        let mut acc = ExpressionAccumulator::new();
        assert_eq!(feed_str(&mut acc, "1//"), Err(AccumulatorError::InvalidSymbol(b'/')));
        assert_eq!(acc.phase(), Phase::CollectingFirst);
    }

    #[test]
    fn test_space_is_invalid() {
        let mut acc = ExpressionAccumulator::new();
        assert_eq!(feed_str(&mut acc, "4/ "), Err(AccumulatorError::InvalidSymbol(b' ')));
    }

    #[test]
    fn test_overflow_resets() {
        let mut acc = ExpressionAccumulator::new();
        assert_eq!(feed_str(&mut acc, "4294967295"), Ok(None));
        assert_eq!(acc.value_a(), u32::MAX);

        assert_eq!(acc.feed(b'0'), Err(AccumulatorError::Overflow));
        assert!(acc.is_idle());

        assert_eq!(feed_str(&mut acc, "1/99999999999"), Err(AccumulatorError::Overflow));
        assert!(acc.is_idle());
    }

    #[test]
    fn test_max_product_fits() {
        let mut acc = ExpressionAccumulator::new();
        let expr = feed_str(&mut acc, "4294967295/4294967295\r").unwrap().unwrap();
        assert_eq!(expr.product(), u32::MAX as u64 * u32::MAX as u64);
    }

    proptest! {
        #[test]
        fn prop_two_operands(a in 0u32..1_000_000, b in 1u32..1_000_000, crlf in any::<bool>()) {
            let mut acc = ExpressionAccumulator::new();
            let terminator = if crlf { '\r' } else { '\n' };
            let text = format!("{}/{}{}", a, b, terminator);

            let expr = feed_str(&mut acc, &text).unwrap().unwrap();
            prop_assert_eq!(expr, CompletedExpression { value_a: a, value_b: b });
            prop_assert_eq!(expr.product(), a as u64 * b as u64);
            prop_assert!(acc.is_idle());
        }

        #[test]
        fn prop_first_phase_terminator_emits_nothing(a in 0u32..1_000_000) {
            let mut acc = ExpressionAccumulator::new();
            let text = format!("{}\r", a);
            prop_assert_eq!(feed_str(&mut acc, &text), Ok(None));
            prop_assert!(acc.is_idle());
        }

        #[test]
        fn prop_invalid_symbol_in_first_phase(
            a in 0u32..1_000_000,
            symbol in any::<u8>().prop_filter("outside grammar", |b| {
                !b.is_ascii_digit() && *b != DELIMITER && *b != b'\r' && *b != b'\n'
            }),
        ) {
            let mut acc = ExpressionAccumulator::new();
            feed_str(&mut acc, &format!("{}", a)).unwrap();

            prop_assert_eq!(acc.feed(symbol), Err(AccumulatorError::InvalidSymbol(symbol)));
            prop_assert!(acc.is_idle());
        }
    }
}
