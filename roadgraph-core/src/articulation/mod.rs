//! Articulation point discovery.
//!
//! A node is an articulation point (cut vertex) when deleting it, along with
//! its incident segments, increases the number of connected components. The
//! search is a low-link depth-first traversal driven by an explicit stack, so
//! recursion depth never depends on the length of a road.

mod search;

use std::collections::BTreeSet;
use std::collections::btree_set;

use tracing::{debug, instrument};

use crate::graph::{Adjacency, Graph, NodeId};

use self::search::SearchContext;

/// The set of cut vertices found in a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticulationPoints {
    points: BTreeSet<NodeId>,
    positions: Vec<usize>,
    components: usize,
}

impl ArticulationPoints {
    /// Finds every articulation point of `graph`.
    ///
    /// `root`, when present in the graph, is swept first; the remaining
    /// components are swept in node insertion order. The result does not
    /// depend on the choice of root.
    ///
    /// # Examples
    /// ```
    /// use roadgraph_core::{Adjacency, ArticulationPoints, GraphBuilder, GraphError, Location, NodeId};
    ///
    /// let mut builder = GraphBuilder::new();
    /// for id in 0..3 {
    ///     builder.add_node(NodeId::new(id), Location::default())?;
    /// }
    /// builder.add_segment(NodeId::new(0), NodeId::new(1), 1.0)?;
    /// builder.add_segment(NodeId::new(1), NodeId::new(2), 1.0)?;
    /// let graph = builder.build();
    ///
    /// let adjacency = Adjacency::derive(&graph);
    /// let points = ArticulationPoints::compute(&graph, &adjacency, None);
    /// assert_eq!(points.iter().collect::<Vec<_>>(), vec![NodeId::new(1)]);
    /// # Ok::<(), GraphError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "core.articulation_points",
        skip(graph, adjacency),
        fields(nodes = graph.node_count(), root = ?root),
    )]
    pub fn compute(graph: &Graph, adjacency: &Adjacency, root: Option<NodeId>) -> Self {
        let first = root.and_then(|id| graph.position_of(id));
        let mut context = SearchContext::new(adjacency);
        let mut components = 0;

        for position in first.into_iter().chain(0..adjacency.len()) {
            if !context.is_remaining(position) {
                continue;
            }
            context.sweep_from(position);
            components += 1;
            debug!(
                root = position,
                subtrees = context.subtrees(position),
                "component swept"
            );
        }

        let positions = context.into_cut_vertices();
        let points: BTreeSet<NodeId> = positions
            .iter()
            .filter_map(|&position| graph.id_at(position))
            .collect();
        debug!(
            articulation_points = points.len(),
            components, "articulation search completed"
        );
        Self {
            points,
            positions,
            components,
        }
    }

    /// Returns `true` when `node` is an articulation point.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.points.contains(&node)
    }

    /// Number of articulation points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the graph has no articulation points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Articulation points in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.points.iter().copied()
    }

    /// The underlying ordered set.
    #[rustfmt::skip]
    #[must_use]
    pub fn as_set(&self) -> &BTreeSet<NodeId> { &self.points }

    /// Number of connected components swept, isolated nodes included.
    #[rustfmt::skip]
    #[must_use]
    pub fn components(&self) -> usize { self.components }

    /// Dense positions of the articulation points, ascending.
    pub(crate) fn positions(&self) -> &[usize] {
        &self.positions
    }
}

impl<'a> IntoIterator for &'a ArticulationPoints {
    type Item = &'a NodeId;
    type IntoIter = btree_set::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod property;
