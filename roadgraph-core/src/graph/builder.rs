//! Validated construction of [`Graph`] values.

use std::collections::HashMap;

use crate::error::GraphError;

use super::{
    Graph,
    highlights::Highlights,
    types::{Location, Node, NodeId, Segment, SegmentId},
};

/// Incrementally assembles a [`Graph`], rejecting malformed input as it
/// arrives.
///
/// # Examples
/// ```
/// use roadgraph_core::{GraphBuilder, GraphError, Location, NodeId};
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node(NodeId::new(1), Location::new(0.0, 0.0))?;
/// builder.add_node(NodeId::new(2), Location::new(1.0, 0.0))?;
/// let segment = builder.add_segment(NodeId::new(1), NodeId::new(2), 1.0)?;
///
/// let graph = builder.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.segment(segment).map(|s| s.weight()), Some(1.0));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    segments: Vec<Segment>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for the given element counts.
    #[must_use]
    pub fn with_capacity(nodes: usize, segments: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            segments: Vec::with_capacity(segments),
        }
    }

    /// Registers a node.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`] when `id` was already added.
    pub fn add_node(&mut self, id: NodeId, location: Location) -> Result<(), GraphError> {
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node: id });
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(Node::new(id, location));
        Ok(())
    }

    /// Adds a segment between two registered nodes.
    ///
    /// Self-loops are accepted; they never contribute a neighbour.
    ///
    /// # Errors
    /// Returns [`GraphError::DanglingSegment`] when either endpoint has not
    /// been registered and [`GraphError::InvalidWeight`] when `weight` is
    /// negative or non-finite.
    pub fn add_segment(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> Result<SegmentId, GraphError> {
        self.push_segment(None, source, target, weight)
    }

    /// Adds a segment tagged with the road it belongs to.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::add_segment`].
    pub fn add_road_segment(
        &mut self,
        road: u64,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> Result<SegmentId, GraphError> {
        self.push_segment(Some(road), source, target, weight)
    }

    fn push_segment(
        &mut self,
        road: Option<u64>,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> Result<SegmentId, GraphError> {
        let id = SegmentId::new(self.segments.len());
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                segment: id,
                weight,
            });
        }
        let left = self.resolve(id, source)?;
        let right = self.resolve(id, target)?;

        self.segments.push(Segment::new(
            id,
            road,
            (source, target),
            (left, right),
            weight,
        ));
        if let Some(node) = self.nodes.get_mut(left) {
            node.attach(id);
        }
        if left != right {
            if let Some(node) = self.nodes.get_mut(right) {
                node.attach(id);
            }
        }
        Ok(id)
    }

    fn resolve(&self, segment: SegmentId, node: NodeId) -> Result<usize, GraphError> {
        self.index
            .get(&node)
            .copied()
            .ok_or(GraphError::DanglingSegment { segment, node })
    }

    /// Finalises the graph. All highlight flags start cleared.
    #[must_use]
    pub fn build(self) -> Graph {
        let highlights = Highlights::new(self.nodes.len(), self.segments.len());
        Graph {
            nodes: self.nodes,
            index: self.index,
            segments: self.segments,
            highlights,
        }
    }
}
