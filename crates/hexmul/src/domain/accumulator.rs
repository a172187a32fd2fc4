//! Big-number accumulator
//!
//! Combines the four partial products of one recursion level by positionally
//! shifted base-16 addition. One accumulator is owned exclusively by one
//! combine step; nothing is shared across sibling subtrees.

use super::digits::digit_char;
use super::errors::MultiplyError;
use super::value_objects::HexString;

/// Fixed-width buffer of base-16 digit values, least significant first.
#[derive(Clone, Debug)]
pub struct Accumulator {
    values: Vec<u8>,
}

impl Accumulator {
    /// All-zero buffer sized for the product of two `len`-digit operands:
    /// `2 * len` result digits plus one carry digit of margin.
    pub fn for_operand_len(len: usize) -> Self {
        Self {
            values: vec![0; 2 * len + 1],
        }
    }

    /// Buffer width in hex digits.
    pub fn width(&self) -> usize {
        self.values.len()
    }

    /// Add `addend * 16^offset` into the buffer.
    ///
    /// Standard base-16 addition walking from the least significant digit,
    /// with carry propagation until exhausted. A write or carry past the
    /// buffer width is `AccumulatorOverflow`; under the sizing above it is
    /// unreachable for valid partial products.
    pub fn add_shifted(&mut self, addend: &HexString, offset: usize) -> Result<(), MultiplyError> {
        let width = self.values.len();
        let mut idx = offset;
        let mut carry = 0u8;

        for value in addend.values_rev() {
            let slot = self
                .values
                .get_mut(idx)
                .ok_or(MultiplyError::AccumulatorOverflow { width })?;
            let sum = *slot + value? + carry;
            *slot = sum % 16;
            carry = sum / 16;
            idx += 1;
        }

        while carry > 0 {
            let slot = self
                .values
                .get_mut(idx)
                .ok_or(MultiplyError::AccumulatorOverflow { width })?;
            let sum = *slot + carry;
            *slot = sum % 16;
            carry = sum / 16;
            idx += 1;
        }

        Ok(())
    }

    /// Freeze into the final result: leading zeros stripped, but a genuinely
    /// zero value renders as `"0"`, never as an empty string.
    pub fn into_hex_string(self) -> HexString {
        let top = self.values.iter().rposition(|&v| v != 0).unwrap_or(0);
        let digits: String = self.values[..=top]
            .iter()
            .rev()
            .map(|&v| digit_char(v))
            .collect();
        HexString::from_validated(digits)
    }
}
