//! Brute-force cut vertex oracle.
//!
//! Deletes each node in turn and counts components over the raw edge list.
//! Quadratic, but it shares nothing with the low-link search.

use std::collections::BTreeSet;

use crate::NodeId;
use crate::test_utils::count_components;

/// Returns every node whose removal increases the component count.
pub(super) fn brute_force_cut_vertices(
    node_count: u64,
    edges: &[(u64, u64, f64)],
) -> BTreeSet<NodeId> {
    let baseline = count_components(node_count, edges, None);
    (0..node_count)
        .filter(|&node| count_components(node_count, edges, Some(node)) > baseline)
        .map(NodeId::new)
        .collect()
}
