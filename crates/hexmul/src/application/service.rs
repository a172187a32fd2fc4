//! Recursive Multiplier Orchestrator
//!
//! Drives one recursion level: validate, split, spawn four workers, join
//! all four (fan-in barrier), combine the partial products through the
//! accumulator. Each worker is itself a full orchestrator invocation on a
//! half-length pair, so the worker tree fans out 4-way per level down to
//! the single-digit base case.

use crate::config::MultiplierConfig;
use crate::domain::accumulator::Accumulator;
use crate::domain::digits::multiply_digits;
use crate::domain::errors::MultiplyError;
use crate::domain::value_objects::{HexString, OperandPair, Quadrant};
use crate::ports::inbound::HexMultiplyApi;
use crate::ports::outbound::{WorkerHandle, WorkerPool};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use tracing::{debug, info};

/// Multiplier service
///
/// Owns the worker pool the recursion fans out through and the resource
/// bound that keeps the worker tree from exploding on oversized inputs.
pub struct MultiplierService {
    workers: Arc<dyn WorkerPool>,
    config: MultiplierConfig,
}

impl MultiplierService {
    /// Create a service with the default config.
    pub fn new(workers: Arc<dyn WorkerPool>) -> Self {
        Self::with_config(workers, MultiplierConfig::default())
    }

    /// Create a service with a custom config.
    pub fn with_config(workers: Arc<dyn WorkerPool>, config: MultiplierConfig) -> Self {
        Self { workers, config }
    }
}

#[async_trait]
impl HexMultiplyApi for MultiplierService {
    async fn multiply(&self, pair: OperandPair) -> Result<HexString, MultiplyError> {
        let len = pair.len();
        if len > self.config.max_operand_len {
            return Err(MultiplyError::OperandTooLong {
                len,
                max: self.config.max_operand_len,
            });
        }

        info!(len, "multiplying operand pair");
        let product = multiply_subtree(pair, Arc::clone(&self.workers)).await?;
        debug!(digits = product.len(), "product ready");
        Ok(product)
    }
}

/// One orchestrator invocation: base case, or split/spawn/join/combine.
///
/// Returned boxed: the recursion flows through `WorkerPool::spawn`, whose
/// adapters call back into this function for the child level.
pub(crate) fn multiply_subtree(
    pair: OperandPair,
    workers: Arc<dyn WorkerPool>,
) -> BoxFuture<'static, Result<HexString, MultiplyError>> {
    async move {
        let len = pair.len();
        if len == 1 {
            let product = multiply_digits(pair.a().leading_digit(), pair.b().leading_digit())?;
            return Ok(HexString::from_product(product));
        }

        let split = pair.split()?;
        let half = split.half;
        debug!(len, half, "splitting operand pair");

        // Spawning: all four workers start before any join.
        let mut handles: Vec<(Quadrant, Box<dyn WorkerHandle>)> = Vec::with_capacity(4);
        for (quadrant, sub) in split.into_quadrants() {
            handles.push((quadrant, workers.spawn(sub)?));
        }

        // Waiting: fan-in barrier. Combining must not start until every
        // partial product is present; their offsets overlap at the half
        // boundary and carries cross it.
        let mut partials = Vec::with_capacity(4);
        for (quadrant, handle) in handles {
            let product = handle.join().await?;
            debug!(%quadrant, digits = product.len(), "partial product ready");
            partials.push((quadrant, product));
        }

        // Combining: LL at 0, HL and LH at half, HH at 2 * half. Addition
        // is commutative and associative, so any add order yields the same
        // digits.
        let mut acc = Accumulator::for_operand_len(len);
        for (quadrant, product) in &partials {
            acc.add_shifted(product, quadrant.offset(half))?;
        }
        Ok(acc.into_hex_string())
    }
    .boxed()
}
