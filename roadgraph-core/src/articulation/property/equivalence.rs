//! Property 1: oracle equivalence.
//!
//! The low-link search must report exactly the nodes whose deletion
//! disconnects their component.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::topologies::{GraphFixture, Topology};
use crate::{Adjacency, ArticulationPoints};

use super::oracle::brute_force_cut_vertices;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let adjacency = Adjacency::derive(&graph);
    let points = ArticulationPoints::compute(&graph, &adjacency, None);
    let expected = brute_force_cut_vertices(fixture.node_count, &fixture.edges);

    if points.as_set() != &expected {
        return Err(TestCaseError::fail(format!(
            "cut vertices {:?} differ from oracle {:?} (topology={:?}, nodes={}, edges={})",
            points.as_set(),
            expected,
            fixture.topology,
            fixture.node_count,
            fixture.edges.len(),
        )));
    }
    Ok(())
}

/// In a tree every node of degree two or more is a cut vertex, and leaves
/// never are.
pub(super) fn run_tree_degree_property(fixture: &GraphFixture) -> TestCaseResult {
    if fixture.topology != Topology::Tree {
        return Ok(());
    }
    let graph = fixture.graph();
    let adjacency = Adjacency::derive(&graph);
    let points = ArticulationPoints::compute(&graph, &adjacency, None);

    for (position, node) in graph.nodes().iter().enumerate() {
        let internal = adjacency.degree(position) >= 2;
        if internal != points.contains(node.id()) {
            return Err(TestCaseError::fail(format!(
                "node {} has degree {} but cut vertex = {}",
                node.id(),
                adjacency.degree(position),
                points.contains(node.id()),
            )));
        }
    }
    Ok(())
}
