//! Output flags consumed by renderers.

use super::types::{NodeId, SegmentId};

/// Per-node and per-segment highlight flags plus the user-selected node.
///
/// Analysis runs overwrite the flags they own: the articulation search owns
/// node flags and the spanning forest builder owns segment flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlights {
    nodes: Vec<bool>,
    segments: Vec<bool>,
    selected: Option<NodeId>,
}

impl Highlights {
    pub(super) fn new(node_count: usize, segment_count: usize) -> Self {
        Self {
            nodes: vec![false; node_count],
            segments: vec![false; segment_count],
            selected: None,
        }
    }

    /// Returns `true` when the node at dense `position` is highlighted.
    #[must_use]
    pub fn is_node_highlighted(&self, position: usize) -> bool {
        self.nodes.get(position).copied().unwrap_or(false)
    }

    /// Returns `true` when `segment` is highlighted.
    #[must_use]
    pub fn is_segment_highlighted(&self, segment: SegmentId) -> bool {
        self.segments.get(segment.index()).copied().unwrap_or(false)
    }

    /// Number of highlighted nodes.
    #[must_use]
    pub fn highlighted_node_count(&self) -> usize {
        self.nodes.iter().filter(|flag| **flag).count()
    }

    /// Iterates highlighted segments in id order.
    pub fn highlighted_segments(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag)
            .map(|(index, _)| SegmentId::new(index))
    }

    /// The node picked by the user, if any.
    #[rustfmt::skip]
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> { self.selected }

    pub(crate) fn set_selected(&mut self, node: Option<NodeId>) {
        self.selected = node;
    }

    pub(crate) fn clear_nodes(&mut self) {
        self.nodes.fill(false);
    }

    pub(crate) fn clear_segments(&mut self) {
        self.segments.fill(false);
    }

    pub(crate) fn mark_node(&mut self, position: usize) {
        if let Some(flag) = self.nodes.get_mut(position) {
            *flag = true;
        }
    }

    pub(crate) fn mark_segment(&mut self, segment: SegmentId) {
        if let Some(flag) = self.segments.get_mut(segment.index()) {
            *flag = true;
        }
    }
}
