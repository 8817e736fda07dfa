//! Fixtures shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{AnalyzeCommand, Cli, CliError, Command, StrategyArg, run_cli};

/// Five nodes: a triangle 1-2-3 with a tail 3-4-5.
pub(super) const NODES: &str = "1\t-36.80\t174.70\n\
                                2\t-36.81\t174.71\n\
                                3\t-36.82\t174.72\n\
                                4\t-36.83\t174.73\n\
                                5\t-36.84\t174.74\n";

pub(super) const SEGMENTS: &str = "roadid\tlength\tnodeid1\tnodeid2\n\
                                   10\t1.0\t1\t2\n\
                                   10\t2.0\t2\t3\n\
                                   11\t4.0\t3\t1\n\
                                   12\t0.5\t3\t4\n\
                                   12\t0.5\t4\t5\n";

/// A temporary directory holding a node and a segment file.
pub(super) struct Network {
    _dir: TempDir,
    pub nodes: PathBuf,
    pub segments: PathBuf,
}

impl Network {
    pub(super) fn write(nodes: &str, segments: &str) -> io::Result<Self> {
        let dir = TempDir::new()?;
        let node_path = dir.path().join("network-nodes.tab");
        let segment_path = dir.path().join("network-segments.tab");
        fs::write(&node_path, nodes)?;
        fs::write(&segment_path, segments)?;
        Ok(Self {
            _dir: dir,
            nodes: node_path,
            segments: segment_path,
        })
    }

    pub(super) fn standard() -> io::Result<Self> {
        Self::write(NODES, SEGMENTS)
    }

    pub(super) fn analyze(&self, root: Option<u64>, strategy: StrategyArg) -> Cli {
        Cli {
            command: Command::Analyze(AnalyzeCommand {
                nodes: self.nodes.clone(),
                segments: self.segments.clone(),
                root,
                strategy,
            }),
        }
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
