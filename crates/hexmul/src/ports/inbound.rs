//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::MultiplyError;
use crate::domain::value_objects::{HexString, OperandPair};
use async_trait::async_trait;

/// Primary multiplication API.
#[async_trait]
pub trait HexMultiplyApi: Send + Sync {
    /// Multiply one validated operand pair and return the normalized product.
    ///
    /// Any failure anywhere in the worker tree aborts the whole computation;
    /// no partial answer is ever produced.
    async fn multiply(&self, pair: OperandPair) -> Result<HexString, MultiplyError>;
}
