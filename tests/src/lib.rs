//! # Hexmul Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── multiply_flows.rs   # End-to-end flows over both worker executors
//!     └── properties.rs       # Proptest properties against a U256 oracle
//! ```
//!
//! Benchmarks live in `benches/`.
//!
//! ## Running
//!
//! ```bash
//! cargo test -p hexmul-tests
//! cargo bench -p hexmul-tests
//! ```

#[cfg(test)]
mod integration;
