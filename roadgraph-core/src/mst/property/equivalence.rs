//! Property 1: oracle equivalence.
//!
//! The forest produced by [`SpanningForest::compute`] must match the
//! sequential oracle in total weight, edge count and tree count. Edge sets
//! may differ under ties; weights may not.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::SpanningForest;
use crate::test_utils::topologies::GraphFixture;

use super::oracle::sequential_kruskal;

/// Relative tolerance for comparing accumulated weights.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = SpanningForest::compute(&graph);
    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges);

    let scale = oracle.total_weight.abs().max(1.0);
    if (forest.total_weight() - oracle.total_weight).abs() > WEIGHT_TOLERANCE * scale {
        return Err(TestCaseError::fail(format!(
            "total weight {} differs from oracle {} (topology={:?}, nodes={}, edges={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.topology,
            fixture.node_count,
            fixture.edges.len(),
        )));
    }
    if forest.edge_count() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count {} differs from oracle {} (topology={:?})",
            forest.edge_count(),
            oracle.edge_count,
            fixture.topology,
        )));
    }
    if forest.tree_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "tree count {} differs from oracle {} (topology={:?})",
            forest.tree_count(),
            oracle.component_count,
            fixture.topology,
        )));
    }
    Ok(())
}
