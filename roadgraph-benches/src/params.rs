//! Benchmark parameter types.

use std::fmt;

/// Parameters for a grid network benchmark run.
#[derive(Clone, Debug)]
pub struct GridBenchParams {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
}

impl GridBenchParams {
    /// Number of nodes in the grid.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Parameters for a path network benchmark run.
#[derive(Clone, Debug)]
pub struct PathBenchParams {
    /// Number of nodes on the path.
    pub length: usize,
}

impl fmt::Display for PathBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.length)
    }
}
