//! # Hexmul: Fork/Join Hex Multiplication
//!
//! Exact multiplication of two arbitrarily large unsigned integers given as
//! equal-length hexadecimal digit strings. The product is computed by the
//! classical 4-way divide-and-conquer scheme: both operands are split into
//! high and low halves, the four half-length sub-products are computed by
//! independently executing workers, and the results are recombined with
//! positionally shifted base-16 addition.
//!
//! ## Architecture
//!
//! - **Domain**: `HexString`, `OperandPair`, `Accumulator`, digit arithmetic
//! - **Ports**: Inbound (`HexMultiplyApi`) and Outbound (`WorkerPool`,
//!   `WorkerHandle`)
//! - **Application**: `MultiplierService` orchestration
//! - **Adapters**: tokio task workers, inline sequential workers, stdio
//!
//! ## Concurrency
//!
//! Every non-base recursion level fans out four workers and joins all four
//! before combining (a strict fan-in barrier). Sibling subtrees share no
//! mutable state; the tree is a pure fork/join dataflow graph.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::MultiplierService;
pub use config::MultiplierConfig;
pub use domain::accumulator::Accumulator;
pub use domain::errors::MultiplyError;
pub use domain::value_objects::{HexString, OperandPair, Quadrant};
pub use ports::inbound::HexMultiplyApi;
pub use ports::outbound::{WorkerHandle, WorkerPool};
