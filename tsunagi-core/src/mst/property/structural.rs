//! Structural invariant verification.
//!
//! For every algorithm, checks that the output:
//!
//! - has exactly `n - 1` edges,
//! - uses canonical pairs (`source < target`) that exist in the input with
//!   the same weight,
//! - contains no cycle and reaches every node,
//! - reports a total weight equal to the sum of its edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::NodeId;

use super::super::{MstAlgorithm, SpanningTree, compute_mst};
use super::oracle::find_root;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    for algorithm in MstAlgorithm::ALL {
        let tree = compute_mst(&fixture.graph, algorithm).map_err(|err| {
            TestCaseError::fail(format!("{algorithm} failed: {err} ({})", fixture.describe()))
        })?;
        validate_tree(fixture, algorithm, &tree).map_err(|msg| {
            TestCaseError::fail(format!("{algorithm}: {msg} ({})", fixture.describe()))
        })?;
    }
    Ok(())
}

fn validate_tree(
    fixture: &MstFixture,
    algorithm: MstAlgorithm,
    tree: &SpanningTree,
) -> Result<(), String> {
    let graph = &fixture.graph;
    if tree.algorithm() != algorithm {
        return Err(format!("tree is tagged {}", tree.algorithm()));
    }

    let expected = graph.node_count() - 1;
    if tree.len() != expected {
        return Err(format!("edge count {}, expected n - 1 = {expected}", tree.len()));
    }

    let mut parent: Vec<NodeId> = graph.nodes().collect();
    let mut summed = 0_u64;
    for (i, edge) in tree.edges().iter().enumerate() {
        if edge.source() >= edge.target() {
            return Err(format!(
                "edge {i}: not canonical ({} >= {})",
                edge.source(),
                edge.target()
            ));
        }
        match graph.weight(edge.source(), edge.target()) {
            Some(weight) if weight == edge.weight() => {}
            Some(weight) => {
                return Err(format!(
                    "edge {i}: weight {} differs from input weight {weight}",
                    edge.weight()
                ));
            }
            None => {
                return Err(format!(
                    "edge {i}: ({}, {}) is not an input edge",
                    edge.source(),
                    edge.target()
                ));
            }
        }

        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target()
            ));
        }
        parent[rb] = ra;
        summed += u64::from(edge.weight());
    }

    let root = find_root(&mut parent, 0);
    if let Some(stray) = graph.nodes().find(|&node| find_root(&mut parent, node) != root) {
        return Err(format!("node {stray} is not reached by the tree"));
    }

    if summed != tree.total_weight() {
        return Err(format!(
            "total_weight {} differs from summed edges {summed}",
            tree.total_weight()
        ));
    }
    Ok(())
}
