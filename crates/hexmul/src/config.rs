//! Configuration for the multiplier

use serde::{Deserialize, Serialize};

/// Multiplier configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MultiplierConfig {
    /// Maximum operand length in hex digits (anti worker-explosion).
    ///
    /// Every non-base level fans out four workers, so an operand of length
    /// L costs on the order of 4^log2(L) tasks. The default of 256 keeps
    /// the worst-case live task count below ~90k.
    pub max_operand_len: usize,
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        Self {
            max_operand_len: 256,
        }
    }
}
