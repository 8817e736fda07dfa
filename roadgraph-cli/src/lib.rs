//! Support library for the roadgraph CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive the CLI without spawning a subprocess.

pub mod cli;
pub mod logging;
