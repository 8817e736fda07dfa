//! Property-based tests for the articulation point search.
//!
//! Compares the search against a brute-force deletion oracle and checks that
//! the result is independent of the sweep root and stable across runs.

mod equivalence;
mod invariance;
mod oracle;
