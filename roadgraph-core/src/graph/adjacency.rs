//! Neighbour sets derived from incident segments.

use super::Graph;

/// Neighbour sets for every node of a [`Graph`], indexed by dense position.
///
/// Each set lists the opposite endpoint of every incident segment once, in
/// first-appearance order. Self-loops contribute nothing.
///
/// # Examples
/// ```
/// use roadgraph_core::{Adjacency, GraphBuilder, GraphError, Location, NodeId};
///
/// let mut builder = GraphBuilder::new();
/// for id in 0..3 {
///     builder.add_node(NodeId::new(id), Location::default())?;
/// }
/// builder.add_segment(NodeId::new(0), NodeId::new(1), 1.0)?;
/// builder.add_segment(NodeId::new(1), NodeId::new(0), 2.0)?;
/// builder.add_segment(NodeId::new(1), NodeId::new(1), 0.5)?;
/// builder.add_segment(NodeId::new(1), NodeId::new(2), 1.0)?;
/// let graph = builder.build();
///
/// let adjacency = Adjacency::derive(&graph);
/// assert_eq!(adjacency.neighbours(1), &[0, 2]);
/// assert!(adjacency.neighbours(9).is_empty());
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Adjacency {
    neighbours: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Derives the neighbour set of every node from its incident segments.
    #[must_use]
    pub fn derive(graph: &Graph) -> Self {
        let node_count = graph.node_count();
        // `marks[other] == position` means `other` is already a neighbour of
        // the node being expanded.
        let mut marks = vec![usize::MAX; node_count];
        let neighbours = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(position, node)| {
                let mut set = Vec::with_capacity(node.incident_segments().len());
                for other in node
                    .incident_segments()
                    .iter()
                    .filter_map(|id| graph.segment(*id))
                    .filter_map(|segment| segment.other_end(position))
                {
                    if let Some(mark) = marks.get_mut(other) {
                        if *mark != position {
                            *mark = position;
                            set.push(other);
                        }
                    }
                }
                set
            })
            .collect();
        Self { neighbours }
    }

    /// Returns the neighbours of the node at `position`.
    ///
    /// Positions outside the graph have no neighbours.
    #[must_use]
    pub fn neighbours(&self, position: usize) -> &[usize] {
        self.neighbours.get(position).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct neighbours of the node at `position`.
    #[must_use]
    pub fn degree(&self, position: usize) -> usize {
        self.neighbours(position).len()
    }

    /// Number of nodes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns `true` when the adjacency covers no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }
}
