//! Error types for hex multiplication

use thiserror::Error;

/// All errors that can occur while multiplying two hex operands.
///
/// Every variant is terminal for the whole computation: a malformed operand
/// or a missing partial product anywhere in the worker tree makes the final
/// sum meaningless, so no partial answer is ever produced.
#[derive(Debug, Error)]
pub enum MultiplyError {
    /// A character outside the hex alphabet
    #[error("invalid hex digit {found:?}")]
    InvalidDigit { found: char },

    /// Unequal lengths, odd length other than 1, or empty input
    #[error("malformed operand: {detail}")]
    MalformedOperand { detail: String },

    /// Operand exceeds the configured worker-tree bound
    #[error("operand length {len} exceeds supported maximum {max}")]
    OperandTooLong { len: usize, max: usize },

    /// A worker could not be started, crashed, or never produced a result
    #[error("worker failure: {detail}")]
    WorkerFailure { detail: String },

    /// Carry past the pre-sized buffer width; indicates an internal sizing bug
    #[error("accumulator overflow: carry beyond buffer width {width}")]
    AccumulatorOverflow { width: usize },
}
