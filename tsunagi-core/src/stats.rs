//! Summary statistics derived from a graph and, optionally, its spanning tree.

use crate::{
    graph::Graph,
    mst::{MstAlgorithm, SpanningTree},
};

/// Read-only summary of a [`Graph`].
///
/// Edge counts use the directed form, so every undirected pair contributes
/// two edges and a complete graph has density `1.0`.
///
/// # Examples
/// ```
/// use tsunagi_core::{GraphBuilder, GraphStats};
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(0, 1, 4)?.add_edge(1, 2, 2)?;
/// let stats = GraphStats::from_graph(&builder.build()?);
///
/// assert_eq!(stats.edge_count(), 4);
/// assert!((stats.density() - 4.0 / 6.0).abs() < f64::EPSILON);
/// assert!(stats.is_connected());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphStats {
    node_count: usize,
    edge_count: usize,
    density: f64,
    is_connected: bool,
    tree: Option<TreeStats>,
}

/// Summary of a spanning tree attached to [`GraphStats`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TreeStats {
    /// Algorithm that produced the tree.
    pub algorithm: MstAlgorithm,
    /// Number of undirected tree edges.
    pub edge_count: usize,
    /// Sum of the tree edge weights.
    pub total_weight: u64,
}

impl From<&SpanningTree> for TreeStats {
    fn from(tree: &SpanningTree) -> Self {
        Self {
            algorithm: tree.algorithm(),
            edge_count: tree.len(),
            total_weight: tree.total_weight(),
        }
    }
}

impl GraphStats {
    /// Derives the statistics of `graph`.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.directed_edge_count();
        Self {
            node_count,
            edge_count,
            density: density(node_count, edge_count),
            is_connected: graph.is_connected(),
            tree: None,
        }
    }

    /// Attaches a summary of `tree`, replacing any previous one.
    #[must_use]
    pub fn with_spanning_tree(mut self, tree: &SpanningTree) -> Self {
        self.tree = Some(TreeStats::from(tree));
        self
    }

    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Number of directed edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// `m / (n * (n - 1))`, or `0.0` when the graph has at most one node.
    #[must_use]
    #[rustfmt::skip]
    pub fn density(&self) -> f64 { self.density }

    #[must_use]
    #[rustfmt::skip]
    pub fn is_connected(&self) -> bool { self.is_connected }

    /// Summary of the attached spanning tree, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> Option<&TreeStats> { self.tree.as_ref() }
}

/// Derives the statistics of `graph`. Equivalent to [`GraphStats::from_graph`].
#[must_use]
pub fn stats(graph: &Graph) -> GraphStats {
    GraphStats::from_graph(graph)
}

#[allow(
    clippy::cast_precision_loss,
    reason = "edge counts stay far below 2^52 for graphs that fit in memory"
)]
fn density(node_count: usize, edge_count: usize) -> f64 {
    if node_count <= 1 {
        return 0.0;
    }
    let possible = node_count as f64 * (node_count - 1) as f64;
    edge_count as f64 / possible
}
