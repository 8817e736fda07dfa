//! The road network data model.
//!
//! A [`Graph`] owns its nodes and segments. Nodes keep their loader-assigned
//! [`NodeId`] and a dense position (their insertion index), which the
//! algorithms use to key their per-run side tables. Topology is immutable once
//! built; only the [`Highlights`] table changes between runs.

mod adjacency;
mod builder;
mod highlights;
mod types;

use std::collections::HashMap;

pub use self::{
    adjacency::Adjacency,
    builder::GraphBuilder,
    highlights::Highlights,
    types::{Location, Node, NodeId, Segment, SegmentId},
};

/// A weighted, undirected network of located nodes.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    segments: Vec<Segment>,
    highlights: Highlights,
}

impl Graph {
    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of segments, self-loops included.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order; a node's slice index is its dense position.
    #[rustfmt::skip]
    #[must_use]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Segments in insertion order; a segment's slice index is its id.
    #[rustfmt::skip]
    #[must_use]
    pub fn segments(&self) -> &[Segment] { &self.segments }

    /// Looks up a node by identifier.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.position_of(id).and_then(|position| self.nodes.get(position))
    }

    /// Looks up a segment by identifier.
    #[must_use]
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.index())
    }

    /// Returns the dense position of `id`.
    #[must_use]
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns the identifier of the node at dense `position`.
    #[must_use]
    pub fn id_at(&self, position: usize) -> Option<NodeId> {
        self.nodes.get(position).map(Node::id)
    }

    /// Read-only view of the highlight flags.
    #[rustfmt::skip]
    #[must_use]
    pub fn highlights(&self) -> &Highlights { &self.highlights }

    /// Returns `true` when the node `id` is currently highlighted.
    #[must_use]
    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.position_of(id)
            .is_some_and(|position| self.highlights.is_node_highlighted(position))
    }

    /// Records `id` as the user-selected node.
    ///
    /// Returns `false`, leaving the previous selection in place, when `id` is
    /// not part of the graph.
    pub fn select(&mut self, id: NodeId) -> bool {
        if self.index.contains_key(&id) {
            self.highlights.set_selected(Some(id));
            true
        } else {
            false
        }
    }

    /// Clears the user selection.
    pub fn clear_selection(&mut self) {
        self.highlights.set_selected(None);
    }

    /// The user-selected node, if any.
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.highlights.selected()
    }

    pub(crate) fn highlights_mut(&mut self) -> &mut Highlights {
        &mut self.highlights
    }
}
