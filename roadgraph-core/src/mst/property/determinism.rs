//! Property 3: determinism.
//!
//! Re-running the builder on the same graph must select the same segments in
//! the same order. With the `parallel` feature this also guards the parallel
//! sort against scheduling-dependent output.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::SpanningForest;
use crate::test_utils::topologies::GraphFixture;

/// Number of re-runs compared against the first result.
const REPETITIONS: usize = 5;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let baseline = SpanningForest::compute(&graph);
    for run in 1..=REPETITIONS {
        let repeat = SpanningForest::compute(&graph);
        if repeat != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run} produced {:?}, expected {:?} (topology={:?})",
                repeat.edges(),
                baseline.edges(),
                fixture.topology,
            )));
        }
    }
    Ok(())
}
