//! Domain invariants for hex multiplication
//!
//! Predicate helpers used by the test suites to check results without
//! re-deriving them.

use super::value_objects::{HexString, OperandPair};

/// A final result carries no leading zero, except the single digit `"0"`.
pub fn invariant_normalized(result: &HexString) -> bool {
    result.len() == 1 || !result.as_str().starts_with('0')
}

/// The product of two `len`-digit operands is at most `2 * len` digits wide.
pub fn invariant_result_width(result: &HexString, operand_len: usize) -> bool {
    result.len() <= 2 * operand_len
}

/// Both members of a pair always have the same length, even or exactly 1.
pub fn invariant_pair_shape(pair: &OperandPair) -> bool {
    let len = pair.len();
    pair.a().len() == pair.b().len() && (len == 1 || len % 2 == 0)
}
