//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

use crate::graph::Graph;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight, so the MST is unique.
    #[weight(2)]
    Distinct,
    /// Weights are drawn from a pool of at most three values, stressing
    /// tie-breaking.
    #[weight(3)]
    FewValues,
    /// A random spanning path plus roughly `n / 2` extra edges.
    #[weight(2)]
    Sparse,
    /// Edge probability between `0.7` and `0.95` on top of a spanning path.
    #[weight(2)]
    Dense,
}

impl WeightDistribution {
    /// Returns `true` when no two edges share a weight.
    pub(super) fn has_distinct_weights(self) -> bool {
        matches!(self, Self::Distinct)
    }
}

/// Connected graph paired with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// The generated graph; always connected.
    pub graph: Graph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.graph.node_count(),
            self.graph.undirected_edges().len(),
        )
    }
}
