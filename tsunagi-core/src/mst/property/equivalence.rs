//! Optimality and cross-algorithm agreement.
//!
//! Kruskal and Prim must both satisfy the cycle property and agree on total
//! weight. Borůvka is only held to the same standard when all weights are
//! distinct, where the minimum spanning tree is unique.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::NodeId;

use super::super::{MstAlgorithm, SpanningTree, compute_mst};
use super::oracle::check_cycle_optimality;
use super::types::MstFixture;

/// Runs the optimality property for the given fixture.
pub(super) fn run_optimality_property(fixture: &MstFixture) -> TestCaseResult {
    let kruskal = tree_for(fixture, MstAlgorithm::Kruskal)?;
    let prim = tree_for(fixture, MstAlgorithm::Prim)?;

    for tree in [&kruskal, &prim] {
        check_cycle_optimality(&fixture.graph, tree).map_err(|msg| {
            TestCaseError::fail(format!(
                "{} is not minimal: {msg} ({})",
                tree.algorithm(),
                fixture.describe()
            ))
        })?;
    }

    if kruskal.total_weight() != prim.total_weight() {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, prim={} ({})",
            kruskal.total_weight(),
            prim.total_weight(),
            fixture.describe(),
        )));
    }

    if fixture.distribution.has_distinct_weights() {
        let boruvka = tree_for(fixture, MstAlgorithm::Boruvka)?;
        let expected = pair_set(&kruskal);
        for tree in [&prim, &boruvka] {
            if pair_set(tree) != expected {
                return Err(TestCaseError::fail(format!(
                    "{} selected a different edge set than kruskal with distinct weights ({})",
                    tree.algorithm(),
                    fixture.describe(),
                )));
            }
        }
    }

    Ok(())
}

fn tree_for(fixture: &MstFixture, algorithm: MstAlgorithm) -> Result<SpanningTree, TestCaseError> {
    compute_mst(&fixture.graph, algorithm).map_err(|err| {
        TestCaseError::fail(format!("{algorithm} failed: {err} ({})", fixture.describe()))
    })
}

fn pair_set(tree: &SpanningTree) -> BTreeSet<(NodeId, NodeId)> {
    tree.edges()
        .iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect()
}
