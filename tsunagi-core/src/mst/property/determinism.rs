//! Run-to-run determinism.
//!
//! Repeating a computation, on the same graph or on an equal clone, must
//! reproduce the same edges in the same acceptance order.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::super::{MstAlgorithm, compute_mst};
use super::types::MstFixture;

const REPETITIONS: usize = 3;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let copy = fixture.graph.clone();
    for algorithm in MstAlgorithm::ALL {
        let baseline = compute_mst(&fixture.graph, algorithm)
            .map_err(|err| TestCaseError::fail(format!("{algorithm} failed: {err}")))?;
        for run in 0..REPETITIONS {
            let graph = if run % 2 == 0 { &fixture.graph } else { &copy };
            let repeat = compute_mst(graph, algorithm)
                .map_err(|err| TestCaseError::fail(format!("{algorithm} failed: {err}")))?;
            if repeat != baseline {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} run {run} diverged from the first run ({})",
                    fixture.describe(),
                )));
            }
        }
    }
    Ok(())
}
