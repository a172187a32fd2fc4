//! Outbound Ports (Worker Channel Protocol)
//!
//! One worker computes one partial product, decoupled from the caller's
//! control flow. The protocol is a one-shot synchronous RPC: the operand
//! pair moves into `spawn` atomically, `join` consumes the handle and
//! resolves to the single result. No pipelining, no partial reads.
//!
//! This boundary is what absorbs the choice of execution substrate: the
//! task adapter runs each worker on its own tokio task, the inline adapter
//! drives the same recursion sequentially.

use crate::domain::errors::MultiplyError;
use crate::domain::value_objects::{HexString, OperandPair};
use async_trait::async_trait;

/// Handle to one independently executing worker.
#[async_trait]
pub trait WorkerHandle: Send {
    /// Block until the worker's partial product is available.
    ///
    /// Fails with `WorkerFailure` if the worker terminated without producing
    /// a result.
    async fn join(self: Box<Self>) -> Result<HexString, MultiplyError>;
}

impl std::fmt::Debug for dyn WorkerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("WorkerHandle")
    }
}

/// Spawner of multiplication workers.
pub trait WorkerPool: Send + Sync {
    /// Start an independent worker that runs the full orchestration on
    /// `pair`. Spawn failure is fatal to the whole computation.
    fn spawn(&self, pair: OperandPair) -> Result<Box<dyn WorkerHandle>, MultiplyError>;
}
