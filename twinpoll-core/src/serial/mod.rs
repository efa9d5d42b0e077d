//! Serial line input
//!
//! State machines fed one received byte at a time.

pub mod accumulator;

pub use accumulator::{
    AccumulatorError, CompletedExpression, ExpressionAccumulator, Phase, DELIMITER,
};
