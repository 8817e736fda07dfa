//! Analysis orchestration for road graphs.
//!
//! Provides the [`Analyzer`] runtime entry point, which runs both algorithms
//! over a borrowed topology and then writes their results into the graph's
//! highlight table, plus single-algorithm convenience functions.

use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use crate::{
    Result,
    articulation::ArticulationPoints,
    builder::ExecutionStrategy,
    error::AnalysisError,
    graph::{Adjacency, Graph, NodeId},
    mst::SpanningForest,
};

/// Combined output of an [`Analyzer`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    articulation_points: ArticulationPoints,
    spanning_forest: SpanningForest,
    strategy: ExecutionStrategy,
}

impl AnalysisReport {
    /// Cut vertices of the analysed graph.
    #[rustfmt::skip]
    #[must_use]
    pub fn articulation_points(&self) -> &ArticulationPoints { &self.articulation_points }

    /// Minimum spanning forest of the analysed graph.
    #[rustfmt::skip]
    #[must_use]
    pub fn spanning_forest(&self) -> &SpanningForest { &self.spanning_forest }

    /// The schedule actually used; never [`ExecutionStrategy::Auto`].
    #[rustfmt::skip]
    #[must_use]
    pub fn strategy(&self) -> ExecutionStrategy { self.strategy }

    /// Splits the report into its parts.
    #[must_use]
    pub fn into_parts(self) -> (ArticulationPoints, SpanningForest) {
        (self.articulation_points, self.spanning_forest)
    }
}

/// Entry point for analysing a road graph.
///
/// # Examples
/// ```
/// use roadgraph_core::{AnalyzerBuilder, GraphBuilder, Location, NodeId};
///
/// let mut builder = GraphBuilder::new();
/// for id in 0..3 {
///     builder.add_node(NodeId::new(id), Location::default())?;
/// }
/// builder.add_segment(NodeId::new(0), NodeId::new(1), 1.0)?;
/// builder.add_segment(NodeId::new(1), NodeId::new(2), 1.0)?;
/// let mut graph = builder.build();
///
/// let report = AnalyzerBuilder::new().build().run(&mut graph)?;
/// assert!(report.articulation_points().contains(NodeId::new(1)));
/// assert_eq!(report.spanning_forest().total_weight(), 2.0);
/// assert!(graph.is_highlighted(NodeId::new(1)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    root: Option<NodeId>,
    execution_strategy: ExecutionStrategy,
}

impl Analyzer {
    pub(crate) fn new(root: Option<NodeId>, execution_strategy: ExecutionStrategy) -> Self {
        Self {
            root,
            execution_strategy,
        }
    }

    /// Returns the configured sweep root, if any.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the execution strategy that will be used when running.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Runs the articulation sweep and the spanning forest builder.
    ///
    /// The root is the configured one, else the graph's selection. On
    /// success, node highlights mark exactly the articulation points and
    /// segment highlights mark exactly the forest edges. On failure the
    /// graph is left untouched.
    ///
    /// # Errors
    /// Returns [`AnalysisError::UnknownRoot`] when the root is not a node of
    /// `graph`, and [`AnalysisError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested without the `parallel`
    /// feature.
    #[instrument(
        name = "core.analyze",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            segments = graph.segment_count(),
            strategy = ?self.execution_strategy,
        ),
    )]
    pub fn run(&self, graph: &mut Graph) -> Result<AnalysisReport> {
        let started = Instant::now();
        let root = self.root.or_else(|| graph.selected());
        let strategy = self.resolve_strategy()?;
        let adjacency = Adjacency::derive(graph);

        if let Some(root) = root {
            let position = graph
                .position_of(root)
                .ok_or(AnalysisError::UnknownRoot { root })?;
            if adjacency.degree(position) == 0 {
                warn!(root = %root, "selected root is isolated");
            }
        }

        let (spanning_forest, articulation_points) =
            execute(strategy, graph, &adjacency, root);
        highlight_articulation_points(graph, &articulation_points);
        highlight_forest(graph, &spanning_forest);

        let elapsed = started.elapsed();
        info!(
            articulation_points = articulation_points.len(),
            forest_edges = spanning_forest.edge_count(),
            trees = spanning_forest.tree_count(),
            total_weight = spanning_forest.total_weight(),
            elapsed_ms = elapsed.as_millis(),
            "analysis completed"
        );
        record_run(&articulation_points, &spanning_forest, elapsed);

        Ok(AnalysisReport {
            articulation_points,
            spanning_forest,
            strategy,
        })
    }

    fn resolve_strategy(&self) -> Result<ExecutionStrategy> {
        match self.execution_strategy {
            ExecutionStrategy::Sequential => Ok(ExecutionStrategy::Sequential),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Auto | ExecutionStrategy::Parallel => {
                Ok(ExecutionStrategy::Parallel)
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Auto => Ok(ExecutionStrategy::Sequential),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => Err(AnalysisError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            }),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(None, ExecutionStrategy::Auto)
    }
}

fn execute(
    strategy: ExecutionStrategy,
    graph: &Graph,
    adjacency: &Adjacency,
    root: Option<NodeId>,
) -> (SpanningForest, ArticulationPoints) {
    match strategy {
        #[cfg(feature = "parallel")]
        ExecutionStrategy::Parallel => rayon::join(
            || SpanningForest::compute(graph),
            || ArticulationPoints::compute(graph, adjacency, root),
        ),
        _ => {
            let forest = SpanningForest::compute(graph);
            let points = ArticulationPoints::compute(graph, adjacency, root);
            (forest, points)
        }
    }
}

/// Finds the articulation points of `graph`, sweeping from its selection.
///
/// Node highlights are reset so that exactly the returned nodes are marked.
/// Segment highlights are left alone.
///
/// # Examples
/// ```
/// use roadgraph_core::{GraphBuilder, Location, NodeId, run_articulation_search};
///
/// let mut builder = GraphBuilder::new();
/// for id in 0..4 {
///     builder.add_node(NodeId::new(id), Location::default())?;
/// }
/// for leaf in 1..4 {
///     builder.add_segment(NodeId::new(0), NodeId::new(leaf), 1.0)?;
/// }
/// let mut graph = builder.build();
///
/// let points = run_articulation_search(&mut graph);
/// assert_eq!(points.iter().collect::<Vec<_>>(), vec![NodeId::new(0)]);
/// assert_eq!(graph.highlights().highlighted_node_count(), 1);
/// # Ok::<(), roadgraph_core::GraphError>(())
/// ```
#[instrument(
    name = "core.run_articulation_search",
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn run_articulation_search(graph: &mut Graph) -> ArticulationPoints {
    let adjacency = Adjacency::derive(graph);
    let points = ArticulationPoints::compute(graph, &adjacency, graph.selected());
    highlight_articulation_points(graph, &points);
    info!(
        articulation_points = points.len(),
        "articulation search completed"
    );
    points
}

/// Builds a minimum spanning forest of `graph`.
///
/// Segment highlights are reset so that exactly the forest edges are marked.
/// Node highlights are left alone.
#[instrument(
    name = "core.run_minimum_spanning_forest",
    skip(graph),
    fields(segments = graph.segment_count()),
)]
pub fn run_minimum_spanning_forest(graph: &mut Graph) -> SpanningForest {
    let forest = SpanningForest::compute(graph);
    highlight_forest(graph, &forest);
    info!(
        forest_edges = forest.edge_count(),
        trees = forest.tree_count(),
        total_weight = forest.total_weight(),
        "spanning forest completed"
    );
    forest
}

fn highlight_articulation_points(graph: &mut Graph, points: &ArticulationPoints) {
    let highlights = graph.highlights_mut();
    highlights.clear_nodes();
    for &position in points.positions() {
        highlights.mark_node(position);
    }
}

fn highlight_forest(graph: &mut Graph, forest: &SpanningForest) {
    let highlights = graph.highlights_mut();
    highlights.clear_segments();
    for &segment in forest.edges() {
        highlights.mark_segment(segment);
    }
}

#[cfg(feature = "metrics")]
fn record_run(points: &ArticulationPoints, forest: &SpanningForest, elapsed: Duration) {
    metrics::counter!("roadgraph_analysis_runs").increment(1);
    metrics::counter!("roadgraph_articulation_points").increment(points.len() as u64);
    metrics::gauge!("roadgraph_forest_trees").set(forest.tree_count() as f64);
    metrics::histogram!("roadgraph_analysis_seconds").record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_run(_points: &ArticulationPoints, _forest: &SpanningForest, _elapsed: Duration) {}
