//! Inline worker adapter
//!
//! Sequential executor behind the worker channel port: `spawn` captures the
//! worker's computation, `join` drives it on the caller's task. Fully
//! deterministic and runtime-free, which makes it the executor of choice
//! for unit and property tests.

use crate::application::service::multiply_subtree;
use crate::domain::errors::MultiplyError;
use crate::domain::value_objects::{HexString, OperandPair};
use crate::ports::outbound::{WorkerHandle, WorkerPool};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::{Arc, Weak};

/// Worker pool that runs each worker inline on `join`.
pub struct InlineWorkerPool {
    self_ref: Weak<InlineWorkerPool>,
}

impl InlineWorkerPool {
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Self {
            self_ref: self_ref.clone(),
        })
    }
}

impl WorkerPool for InlineWorkerPool {
    fn spawn(&self, pair: OperandPair) -> Result<Box<dyn WorkerHandle>, MultiplyError> {
        let workers: Arc<dyn WorkerPool> =
            self.self_ref
                .upgrade()
                .ok_or_else(|| MultiplyError::WorkerFailure {
                    detail: "worker pool dropped during spawn".to_string(),
                })?;
        // The pair moves into the future here, before any result can be
        // read; the exactly-once send/receive contract holds trivially.
        Ok(Box::new(InlineWorkerHandle {
            future: multiply_subtree(pair, workers),
        }))
    }
}

struct InlineWorkerHandle {
    future: BoxFuture<'static, Result<HexString, MultiplyError>>,
}

#[async_trait]
impl WorkerHandle for InlineWorkerHandle {
    async fn join(self: Box<Self>) -> Result<HexString, MultiplyError> {
        self.future.await
    }
}
