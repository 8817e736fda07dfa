//! Command-line interface for analysing tab-separated road networks.
//!
//! The single `analyze` command loads a node file and a segment file, runs
//! the articulation point search and the minimum spanning forest, and
//! prints a summary.

mod commands;

pub use commands::{
    AnalyzeCommand, Cli, CliError, Command, ExecutionSummary, StrategyArg, render_summary,
    run_cli,
};

#[cfg(test)]
mod test_helpers;
