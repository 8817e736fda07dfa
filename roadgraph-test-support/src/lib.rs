//! Shared test utilities used across roadgraph crates.

pub mod ci;
pub mod tracing;
