//! Property 2: root invariance and idempotence.
//!
//! Sweeping from any node must give the same set, and running the search
//! twice from the same root must give identical results.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::topologies::GraphFixture;
use crate::{Adjacency, ArticulationPoints, NodeId};

/// Runs the root invariance property for the given fixture.
pub(super) fn run_root_invariance_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let adjacency = Adjacency::derive(&graph);
    let baseline = ArticulationPoints::compute(&graph, &adjacency, None);

    for raw in 0..fixture.node_count {
        let root = NodeId::new(raw);
        let rooted = ArticulationPoints::compute(&graph, &adjacency, Some(root));
        if rooted != baseline {
            return Err(TestCaseError::fail(format!(
                "root {root} gave {:?}, insertion order gave {:?} (topology={:?})",
                rooted.as_set(),
                baseline.as_set(),
                fixture.topology,
            )));
        }
    }
    Ok(())
}

/// Runs the idempotence property for the given fixture.
pub(super) fn run_idempotence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let adjacency = Adjacency::derive(&graph);
    let root = Some(NodeId::new(fixture.node_count / 2));
    let first = ArticulationPoints::compute(&graph, &adjacency, root);
    let second = ArticulationPoints::compute(&graph, &Adjacency::derive(&graph), root);
    if first != second {
        return Err(TestCaseError::fail(format!(
            "repeated run gave {:?}, first gave {:?}",
            second.as_set(),
            first.as_set(),
        )));
    }
    Ok(())
}
