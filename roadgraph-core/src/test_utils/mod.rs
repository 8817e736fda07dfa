//! Shared test utilities for `roadgraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use roadgraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Graph, GraphBuilder, Location, NodeId};

pub(crate) mod topologies;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `ROADGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph with nodes `0..node_count` and the given weighted edges.
///
/// Node `i` is placed at `(i, 0)`.
pub(crate) fn graph_from_edges(node_count: u64, edges: &[(u64, u64, f64)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for id in 0..node_count {
        builder
            .add_node(NodeId::new(id), Location::new(id as f64, 0.0))
            .expect("node ids are unique");
    }
    for &(source, target, weight) in edges {
        builder
            .add_segment(NodeId::new(source), NodeId::new(target), weight)
            .expect("edge endpoints must exist");
    }
    builder.build()
}

/// Builds a graph with unit-weight edges.
pub(crate) fn unit_graph(node_count: u64, edges: &[(u64, u64)]) -> Graph {
    let weighted: Vec<_> = edges
        .iter()
        .map(|&(source, target)| (source, target, 1.0))
        .collect();
    graph_from_edges(node_count, &weighted)
}

/// Convenience for building sorted id lists in assertions.
pub(crate) fn ids(raw: &[u64]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::new).collect()
}

/// Counts connected components over raw edges, optionally pretending one
/// node has been deleted together with its edges.
pub(crate) fn count_components(
    node_count: u64,
    edges: &[(u64, u64, f64)],
    removed: Option<u64>,
) -> usize {
    let size = usize::try_from(node_count).expect("node count fits usize");
    let mut parent: Vec<usize> = (0..size).collect();
    let mut components = size - usize::from(removed.is_some());

    fn root(parent: &mut [usize], mut node: usize) -> usize {
        while parent[node] != node {
            parent[node] = parent[parent[node]];
            node = parent[node];
        }
        node
    }

    for &(source, target, _) in edges {
        if Some(source) == removed || Some(target) == removed {
            continue;
        }
        let left = root(&mut parent, source as usize);
        let right = root(&mut parent, target as usize);
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}
