//! Builder utilities for configuring analysis runs.
//!
//! Exposes the execution strategy selection surface and the builder used to
//! construct [`Analyzer`] instances.

use crate::{analysis::Analyzer, graph::NodeId};

/// Indicates how [`Analyzer::run`] schedules the two algorithms.
///
/// `Auto` resolves deterministically: it runs both algorithms concurrently
/// when the `parallel` feature is compiled in and one after the other
/// otherwise, so results never depend on the build.
///
/// # Examples
/// ```
/// use roadgraph_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Allow the library to pick a schedule.
    #[default]
    Auto,
    /// Run the spanning forest first, then the articulation sweep.
    Sequential,
    /// Run both algorithms concurrently on the Rayon pool.
    Parallel,
}

/// Configures and constructs [`Analyzer`] instances.
///
/// # Examples
/// ```
/// use roadgraph_core::{AnalyzerBuilder, ExecutionStrategy, NodeId};
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_root(NodeId::new(7))
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build();
/// assert_eq!(analyzer.root(), Some(NodeId::new(7)));
/// assert_eq!(analyzer.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalyzerBuilder {
    root: Option<NodeId>,
    execution_strategy: ExecutionStrategy,
}

impl AnalyzerBuilder {
    /// Creates a builder with no root and the `Auto` strategy.
    ///
    /// # Examples
    /// ```
    /// use roadgraph_core::{AnalyzerBuilder, ExecutionStrategy};
    ///
    /// let builder = AnalyzerBuilder::new();
    /// assert_eq!(builder.root(), None);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node the articulation sweep starts from.
    ///
    /// Without one, [`Analyzer::run`] falls back to the graph's own
    /// selection.
    #[must_use]
    pub fn with_root(mut self, root: NodeId) -> Self {
        self.root = Some(root);
        self
    }

    /// Returns the configured root, if any.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Sets the execution strategy to use when running.
    ///
    /// # Examples
    /// ```
    /// use roadgraph_core::{AnalyzerBuilder, ExecutionStrategy};
    ///
    /// let builder = AnalyzerBuilder::new().with_execution_strategy(ExecutionStrategy::Parallel);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Parallel);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Constructs the [`Analyzer`].
    ///
    /// Roots are validated against a graph at run time, not here.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer::new(self.root, self.execution_strategy)
    }
}
