//! Integration tests for pixops crates.
//!
//! This crate contains end-to-end tests that exercise `pixops-core` buffers
//! through chains of `pixops-ops` operations, plus shared fixtures.
//!
//! # Running
//!
//! ```bash
//! RUST_LOG=pixops_ops=trace cargo test --package pixops-tests
//! ```

pub mod fixtures;

#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod properties;
