//! Minimum spanning forest construction.
//!
//! Kruskal's algorithm over every segment of a [`Graph`]. Segments are
//! ordered by `(weight, id)`; with the `parallel` feature the ordering uses a
//! Rayon parallel sort, which is deterministic because the key is total.
//! Cycle checks go through a rank-weighted [`DisjointForest`].

mod union_find;

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::graph::{Graph, SegmentId};

pub use self::union_find::{DisjointForest, UnionOutcome};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<SegmentId>,
    total_weight: f64,
    tree_count: usize,
}

impl SpanningForest {
    /// Computes a minimum spanning forest of `graph`.
    ///
    /// Self-loops are never selected. A graph without segments yields one
    /// tree per node; an empty graph yields no trees.
    ///
    /// # Examples
    /// ```
    /// use roadgraph_core::{GraphBuilder, GraphError, Location, NodeId, SpanningForest};
    ///
    /// let mut builder = GraphBuilder::new();
    /// for id in 0..3 {
    ///     builder.add_node(NodeId::new(id), Location::default())?;
    /// }
    /// builder.add_segment(NodeId::new(0), NodeId::new(1), 1.0)?;
    /// builder.add_segment(NodeId::new(1), NodeId::new(2), 2.0)?;
    /// builder.add_segment(NodeId::new(0), NodeId::new(2), 5.0)?;
    /// let graph = builder.build();
    ///
    /// let forest = SpanningForest::compute(&graph);
    /// assert_eq!(forest.edge_count(), 2);
    /// assert_eq!(forest.total_weight(), 3.0);
    /// assert!(forest.is_tree());
    /// # Ok::<(), GraphError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "core.spanning_forest",
        skip(graph),
        fields(nodes = graph.node_count(), segments = graph.segment_count()),
    )]
    pub fn compute(graph: &Graph) -> Self {
        let order = ascending_segments(graph);
        let mut forest = DisjointForest::new(graph.node_count());
        let mut edges = Vec::with_capacity(graph.node_count().saturating_sub(1));
        let mut total_weight = 0.0;

        for id in order {
            if forest.roots() <= 1 {
                break;
            }
            let Some(segment) = graph.segment(id) else {
                continue;
            };
            let (left, right) = segment.positions();
            if forest.union(left, right) == UnionOutcome::Merged {
                edges.push(id);
                total_weight += segment.weight();
            }
        }

        debug!(
            edges = edges.len(),
            trees = forest.roots(),
            total_weight,
            "spanning forest completed"
        );
        Self {
            edges,
            total_weight,
            tree_count: forest.roots(),
        }
    }

    /// Selected segments in the order Kruskal accepted them.
    #[rustfmt::skip]
    #[must_use]
    pub fn edges(&self) -> &[SegmentId] { &self.edges }

    /// Number of selected segments.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of the selected segment weights.
    #[rustfmt::skip]
    #[must_use]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Number of trees in the forest, i.e. connected components of the graph.
    #[rustfmt::skip]
    #[must_use]
    pub fn tree_count(&self) -> usize { self.tree_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.tree_count == 1
    }

    /// Returns `true` when `segment` was selected.
    #[must_use]
    pub fn contains(&self, segment: SegmentId) -> bool {
        self.edges.contains(&segment)
    }
}

fn cmp_segments(graph: &Graph, left: SegmentId, right: SegmentId) -> Ordering {
    let weight = |id: SegmentId| graph.segment(id).map_or(f64::INFINITY, |s| s.weight());
    weight(left)
        .total_cmp(&weight(right))
        .then_with(|| left.cmp(&right))
}

fn ascending_segments(graph: &Graph) -> Vec<SegmentId> {
    let mut order: Vec<SegmentId> = graph.segments().iter().map(|s| s.id()).collect();
    #[cfg(feature = "parallel")]
    order.par_sort_unstable_by(|left, right| cmp_segments(graph, *left, *right));
    #[cfg(not(feature = "parallel"))]
    order.sort_unstable_by(|left, right| cmp_segments(graph, *left, *right));
    order
}

#[cfg(test)]
mod property;
