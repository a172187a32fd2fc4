//! Adapters: worker executors behind the outbound port, and the stdio
//! line protocol.

pub mod inline;
pub mod stdio;
pub mod task_pool;
