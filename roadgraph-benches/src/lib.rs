//! Benchmark support crate for roadgraph.
//!
//! Provides seeded synthetic road networks and parameter types used by the
//! Criterion benchmarks for the articulation search, the spanning forest
//! builder and the combined analysis.

pub mod error;
pub mod networks;
pub mod params;
