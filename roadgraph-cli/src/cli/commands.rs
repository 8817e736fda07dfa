//! Command implementations and argument parsing for the roadgraph CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use roadgraph_core::{AnalysisError, AnalyzerBuilder, ExecutionStrategy, NodeId};
use roadgraph_providers_tab::{TabGraphSource, TabProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "roadgraph",
    about = "Find articulation points and minimum spanning forests in road networks."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a road network and run both analyses.
    Analyze(AnalyzeCommand),
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeCommand {
    /// Tab-separated node file: `node_id<TAB>lat<TAB>lon`.
    #[arg(long)]
    pub nodes: PathBuf,

    /// Tab-separated segment file with a header line.
    #[arg(long)]
    pub segments: PathBuf,

    /// Node id to start the articulation sweep from.
    #[arg(long)]
    pub root: Option<u64>,

    /// How to schedule the two analyses.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,
}

/// Command-line spelling of [`ExecutionStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Let the library decide.
    Auto,
    /// Run the analyses one after the other.
    Sequential,
    /// Run the analyses concurrently.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the road network failed.
    #[error(transparent)]
    Provider(#[from] TabProviderError),
    /// The analysis rejected its configuration.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl CliError {
    /// Stable machine-readable code of the underlying failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Provider(error) => error.code(),
            Self::Analysis(error) => error.code().as_str(),
        }
    }
}

/// Summarises the outcome of an `analyze` run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Name of the loaded road network.
    pub source: String,
    /// Number of nodes loaded.
    pub nodes: usize,
    /// Number of segments loaded.
    pub segments: usize,
    /// Articulation points in ascending id order.
    pub articulation_points: Vec<NodeId>,
    /// Number of spanning forest edges.
    pub forest_edges: usize,
    /// Total spanning forest weight.
    pub total_weight: f64,
    /// Number of trees in the spanning forest.
    pub tree_count: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or analysis fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use roadgraph_cli::cli::{AnalyzeCommand, Cli, Command, StrategyArg, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let nodes = dir.path().join("nodes.tab");
/// let segments = dir.path().join("segments.tab");
/// std::fs::write(&nodes, "1\t0\t0\n2\t0\t1\n3\t0\t2\n")?;
/// std::fs::write(&segments, "road\tlength\ta\tb\n7\t1\t1\t2\n7\t1\t2\t3\n")?;
/// let cli = Cli {
///     command: Command::Analyze(AnalyzeCommand {
///         nodes,
///         segments,
///         root: None,
///         strategy: StrategyArg::Auto,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.articulation_points.len(), 1);
/// assert_eq!(summary.tree_count, 1);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Analyze(analyze) => {
            Span::current().record("command", field::display("analyze"));
            run_analyze(analyze)
        }
    }
}

#[instrument(
    name = "cli.analyze",
    err,
    skip(command),
    fields(root = field::Empty, strategy = ?command.strategy),
)]
pub(super) fn run_analyze(command: AnalyzeCommand) -> Result<ExecutionSummary, CliError> {
    let AnalyzeCommand {
        nodes,
        segments,
        root,
        strategy,
    } = command;

    let mut builder = AnalyzerBuilder::new().with_execution_strategy(strategy.into());
    if let Some(raw) = root {
        Span::current().record("root", raw);
        builder = builder.with_root(NodeId::new(raw));
    }

    let source = TabGraphSource::from_paths(&nodes, &segments)?;
    let name = source.name().to_owned();
    let mut graph = source.into_graph();
    let report = builder.build().run(&mut graph)?;

    let forest = report.spanning_forest();
    let summary = ExecutionSummary {
        source: name,
        nodes: graph.node_count(),
        segments: graph.segment_count(),
        articulation_points: report.articulation_points().iter().collect(),
        forest_edges: forest.edge_count(),
        total_weight: forest.total_weight(),
        tree_count: forest.tree_count(),
    };
    info!(
        source = summary.source.as_str(),
        articulation_points = summary.articulation_points.len(),
        trees = summary.tree_count,
        "command completed"
    );
    Ok(summary)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Articulation point ids follow their count, one per tab-indented line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use roadgraph_cli::cli::{ExecutionSummary, render_summary};
/// # use roadgraph_core::NodeId;
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     nodes: 3,
///     segments: 2,
///     articulation_points: vec![NodeId::new(2)],
///     forest_edges: 2,
///     total_weight: 2.0,
///     tree_count: 1,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("articulation points: 1\n\t2\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "nodes: {}", summary.nodes)?;
    writeln!(writer, "segments: {}", summary.segments)?;
    writeln!(
        writer,
        "articulation points: {}",
        summary.articulation_points.len()
    )?;
    for node in &summary.articulation_points {
        writeln!(writer, "\t{node}")?;
    }
    writeln!(writer, "forest edges: {}", summary.forest_edges)?;
    writeln!(writer, "total weight: {}", summary.total_weight)?;
    writeln!(writer, "trees: {}", summary.tree_count)?;
    Ok(())
}
