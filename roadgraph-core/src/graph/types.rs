//! Identifier and element types for road graphs.

use std::fmt;

/// Stable identifier assigned to a node by the loader.
///
/// # Examples
/// ```
/// use roadgraph_core::NodeId;
///
/// let id = NodeId::new(17);
/// assert_eq!(id.get(), 17);
/// assert_eq!(id.to_string(), "17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a node identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a segment within its graph's segment collection.
///
/// Identifiers are assigned in insertion order by [`crate::GraphBuilder`],
/// which also fixes the tie-break order used by the spanning forest builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(usize);

impl SegmentId {
    /// Creates a segment identifier from a collection position.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the position of the segment in the collection.
    #[rustfmt::skip]
    #[must_use]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A 2D coordinate attached to a node.
///
/// The analysis never inspects coordinates; they are carried for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal component.
    #[rustfmt::skip]
    #[must_use]
    pub const fn x(&self) -> f64 { self.x }

    /// Vertical component.
    #[rustfmt::skip]
    #[must_use]
    pub const fn y(&self) -> f64 { self.y }
}

/// A located vertex and the segments that touch it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    location: Location,
    incident: Vec<SegmentId>,
}

impl Node {
    pub(super) fn new(id: NodeId, location: Location) -> Self {
        Self {
            id,
            location,
            incident: Vec::new(),
        }
    }

    pub(super) fn attach(&mut self, segment: SegmentId) {
        self.incident.push(segment);
    }

    /// Returns the node identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn id(&self) -> NodeId { self.id }

    /// Returns the node location.
    #[rustfmt::skip]
    #[must_use]
    pub fn location(&self) -> Location { self.location }

    /// Returns the segments incident to this node in insertion order.
    ///
    /// A self-loop appears once.
    #[rustfmt::skip]
    #[must_use]
    pub fn incident_segments(&self) -> &[SegmentId] { &self.incident }
}

/// An undirected weighted edge between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: SegmentId,
    road: Option<u64>,
    endpoints: (NodeId, NodeId),
    positions: (usize, usize),
    weight: f64,
}

impl Segment {
    pub(super) fn new(
        id: SegmentId,
        road: Option<u64>,
        endpoints: (NodeId, NodeId),
        positions: (usize, usize),
        weight: f64,
    ) -> Self {
        Self {
            id,
            road,
            endpoints,
            positions,
            weight,
        }
    }

    /// Returns the segment identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn id(&self) -> SegmentId { self.id }

    /// Returns the road this segment belongs to, when the loader supplied one.
    #[rustfmt::skip]
    #[must_use]
    pub fn road(&self) -> Option<u64> { self.road }

    /// Returns both endpoints in the order they were supplied.
    #[rustfmt::skip]
    #[must_use]
    pub fn endpoints(&self) -> (NodeId, NodeId) { self.endpoints }

    /// Returns the segment weight.
    #[rustfmt::skip]
    #[must_use]
    pub fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.positions.0 == self.positions.1
    }

    /// Dense node positions of both endpoints.
    pub(crate) fn positions(&self) -> (usize, usize) {
        self.positions
    }

    /// Returns the endpoint opposite `position`, or `None` for a self-loop.
    pub(crate) fn other_end(&self, position: usize) -> Option<usize> {
        let (left, right) = self.positions;
        if left == right {
            None
        } else if left == position {
            Some(right)
        } else {
            Some(left)
        }
    }
}
