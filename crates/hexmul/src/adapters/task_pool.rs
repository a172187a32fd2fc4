//! Tokio task worker adapter
//!
//! One tokio task per worker; the result travels back over a oneshot
//! channel, one request then one response per worker. This replaces the
//! process-per-worker model with recursive task submission while keeping
//! the observable contract: each worker receives both operands atomically
//! and the parent never sees a partial result.

use crate::application::service::multiply_subtree;
use crate::domain::errors::MultiplyError;
use crate::domain::value_objects::{HexString, OperandPair};
use crate::ports::outbound::{WorkerHandle, WorkerPool};
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Worker pool that runs each worker on its own tokio task.
///
/// Holds a weak self-reference so every spawned worker recurses through
/// the same pool for its own 4-way fan-out.
pub struct TaskWorkerPool {
    self_ref: Weak<TaskWorkerPool>,
}

impl TaskWorkerPool {
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Self {
            self_ref: self_ref.clone(),
        })
    }
}

impl WorkerPool for TaskWorkerPool {
    fn spawn(&self, pair: OperandPair) -> Result<Box<dyn WorkerHandle>, MultiplyError> {
        let workers: Arc<dyn WorkerPool> =
            self.self_ref
                .upgrade()
                .ok_or_else(|| MultiplyError::WorkerFailure {
                    detail: "worker pool dropped during spawn".to_string(),
                })?;

        let runtime =
            tokio::runtime::Handle::try_current().map_err(|e| MultiplyError::WorkerFailure {
                detail: format!("no async runtime to spawn worker on: {e}"),
            })?;

        let (tx, rx) = oneshot::channel();
        let task = runtime.spawn(async move {
            let result = multiply_subtree(pair, workers).await;
            // A dropped receiver means the parent already failed; the
            // partial product has nowhere to go.
            let _ = tx.send(result);
        });

        Ok(Box::new(TaskWorkerHandle { rx, task }))
    }
}

struct TaskWorkerHandle {
    rx: oneshot::Receiver<Result<HexString, MultiplyError>>,
    task: JoinHandle<()>,
}

#[async_trait]
impl WorkerHandle for TaskWorkerHandle {
    async fn join(self: Box<Self>) -> Result<HexString, MultiplyError> {
        let this = *self;
        match this.rx.await {
            Ok(result) => result,
            // Sender dropped without responding: the task panicked or was
            // aborted before it could send.
            Err(_) => {
                let detail = match this.task.await {
                    Err(join_err) if join_err.is_panic() => {
                        "worker panicked before responding".to_string()
                    }
                    _ => "worker terminated without producing a result".to_string(),
                };
                Err(MultiplyError::WorkerFailure { detail })
            }
        }
    }
}
