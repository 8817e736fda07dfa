//! Error types for the tab-separated provider.

use std::fmt;
use std::path::PathBuf;

use roadgraph_core::GraphError;
use thiserror::Error;

/// Which of the two input files a failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabFile {
    /// The node file.
    Nodes,
    /// The segment file.
    Segments,
}

impl fmt::Display for TabFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nodes => "nodes",
            Self::Segments => "segments",
        })
    }
}

/// What was wrong with a rejected line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseReason {
    /// The line ended before the named column.
    #[error("missing `{field}` column")]
    MissingField {
        /// Column name.
        field: &'static str,
    },
    /// The named column did not parse as a number.
    #[error("`{field}` is not a valid number: `{value}`")]
    InvalidNumber {
        /// Column name.
        field: &'static str,
        /// Raw column text.
        value: String,
    },
}

/// Errors raised while loading a tab-separated road network.
#[derive(Debug, Error)]
pub enum TabProviderError {
    /// An input file could not be opened.
    #[error("failed to read {file} file `{}`: {source}", path.display())]
    Open {
        /// Which input failed.
        file: TabFile,
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading from an already-open input failed.
    #[error("i/o error while reading {file}: {source}")]
    Io {
        /// Which input failed.
        file: TabFile,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A line could not be parsed.
    #[error("{file} line {line}: {reason}")]
    Parse {
        /// Which input the line came from.
        file: TabFile,
        /// One-based line number, header included.
        line: usize,
        /// What was wrong with the line.
        reason: ParseReason,
    },
    /// The parsed records did not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl TabProviderError {
    /// Stable machine-readable code for this error.
    ///
    /// Graph construction failures report the core's own code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Open { .. } => "TAB_OPEN_FAILED",
            Self::Io { .. } => "TAB_IO",
            Self::Parse { .. } => "TAB_PARSE",
            Self::Graph(error) => error.code().as_str(),
        }
    }
}
