//! Property-based tests for the Kruskal spanning forest builder.
//!
//! Verifies the builder against a sequential oracle, validates structural
//! invariants (acyclicity, edge count, component count) and checks that
//! repeated runs are identical across graph topologies.

mod determinism;
mod equivalence;
mod oracle;
