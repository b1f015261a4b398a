//! Minimum spanning tree (MST) construction.
//!
//! Three algorithms share the undirected view of a [`Graph`]: Kruskal and
//! Prim produce exact minimum spanning trees; the component-merging
//! Borůvka variant always produces a spanning tree but applies each round's
//! nominations one after another (see [`boruvka()`]). Every algorithm breaks
//! weight ties by edge discovery order, so repeated runs select identical
//! edges.

mod boruvka;
mod kruskal;
mod prim;
mod union_find;

use std::{cmp::Ordering, fmt, str::FromStr};

use tracing::{Span, field, instrument, warn};

use crate::{
    error::define_error_codes,
    graph::{Graph, NodeId, UndirectedEdge, Weight},
};

/// Errors returned while computing a spanning tree.
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The undirected graph has more than one connected component.
    #[error("graph is not connected ({components} components)")]
    NotConnected {
        /// Number of connected components found in the input.
        components: usize,
    },
    /// The requested algorithm name is not recognised.
    #[error("unknown MST algorithm `{name}`; expected kruskal, prim, or boruvka")]
    UnknownAlgorithm {
        /// Name supplied by the caller.
        name: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The undirected graph has more than one connected component.
        NotConnected => NotConnected { .. } => "MST_NOT_CONNECTED",
        /// The requested algorithm name is not recognised.
        UnknownAlgorithm => UnknownAlgorithm { .. } => "MST_UNKNOWN_ALGORITHM",
    }
}

/// Selectable spanning tree algorithm.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Global edge sort plus union-find cycle checks.
    Kruskal,
    /// Frontier growth from the lowest-numbered node.
    Prim,
    /// Round-based component merging.
    Boruvka,
}

impl MstAlgorithm {
    /// Every supported algorithm, in a stable order.
    pub const ALL: [Self; 3] = [Self::Kruskal, Self::Prim, Self::Boruvka];

    /// Returns the lowercase algorithm name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
            Self::Boruvka => "boruvka",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MstAlgorithm {
    type Err = MstError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            "boruvka" | "borůvka" => Ok(Self::Boruvka),
            _ => Err(MstError::UnknownAlgorithm {
                name: raw.to_owned(),
            }),
        }
    }
}

/// A single tree edge in canonical undirected form (`source < target`).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MstEdge {
    source: NodeId,
    target: NodeId,
    weight: Weight,
    sequence: u64,
}

impl MstEdge {
    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> NodeId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> NodeId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns the discovery sequence used to break weight ties.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> u64 { self.sequence }
}

impl From<&UndirectedEdge> for MstEdge {
    fn from(edge: &UndirectedEdge) -> Self {
        Self {
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
            sequence: edge.sequence(),
        }
    }
}

impl Ord for MstEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for MstEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The `n - 1` edges chosen by one of the algorithms, in acceptance order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    algorithm: MstAlgorithm,
    edges: Vec<MstEdge>,
}

impl SpanningTree {
    /// Returns the algorithm that produced the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Returns the tree edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the number of tree edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for the tree of a single-node graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sums the edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight)).sum()
    }

    /// Returns `true` when the tree contains the pair `{a, b}`.
    #[must_use]
    pub fn contains(&self, a: NodeId, b: NodeId) -> bool {
        let (source, target) = if a <= b { (a, b) } else { (b, a) };
        self.edges
            .iter()
            .any(|edge| edge.source == source && edge.target == target)
    }
}

/// Computes a spanning tree of `graph` with the selected algorithm.
///
/// # Errors
/// Returns [`MstError::NotConnected`] when the undirected graph has more than
/// one component; no edges are selected in that case.
///
/// # Examples
/// ```
/// use tsunagi_core::{GraphBuilder, MstAlgorithm, compute_mst};
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(0, 1, 1)?.add_edge(1, 2, 2)?.add_edge(0, 2, 5)?;
/// let graph = builder.build()?;
///
/// let tree = compute_mst(&graph, MstAlgorithm::Prim)?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.compute_mst",
    err,
    skip(graph),
    fields(
        algorithm = %algorithm,
        node_count = graph.node_count(),
        edges = field::Empty,
        total_weight = field::Empty,
    ),
)]
pub fn compute_mst(graph: &Graph, algorithm: MstAlgorithm) -> Result<SpanningTree, MstError> {
    let components = graph.component_count();
    if components != 1 {
        warn!(components, "refusing to span a disconnected graph");
        return Err(MstError::NotConnected { components });
    }

    let edges = match algorithm {
        MstAlgorithm::Kruskal => kruskal::select_edges(graph),
        MstAlgorithm::Prim => prim::select_edges(graph),
        MstAlgorithm::Boruvka => boruvka::select_edges(graph)?,
    };
    debug_assert_eq!(edges.len(), graph.node_count().saturating_sub(1));

    let tree = SpanningTree { algorithm, edges };
    let span = Span::current();
    span.record("edges", tree.len());
    span.record("total_weight", tree.total_weight());
    Ok(tree)
}

/// Computes an exact minimum spanning tree with Kruskal's algorithm.
///
/// Edges are sorted by weight with ties kept in discovery order and accepted
/// whenever their endpoints lie in different union-find sets.
///
/// # Errors
/// Returns [`MstError::NotConnected`] for disconnected graphs.
pub fn kruskal(graph: &Graph) -> Result<SpanningTree, MstError> {
    compute_mst(graph, MstAlgorithm::Kruskal)
}

/// Computes an exact minimum spanning tree with Prim's algorithm, growing
/// from node `0`.
///
/// # Errors
/// Returns [`MstError::NotConnected`] for disconnected graphs.
pub fn prim(graph: &Graph) -> Result<SpanningTree, MstError> {
    compute_mst(graph, MstAlgorithm::Prim)
}

/// Computes a spanning tree by repeatedly merging components along their
/// cheapest outgoing edge.
///
/// Each round nominates, for every component, the lightest edge leaving it
/// (scanning members in id order and keeping the first edge found at the
/// minimum weight). Nominations are then applied in component order; one
/// whose endpoints were already joined earlier in the same round is
/// skipped. The result is always a spanning tree, but its weight is only
/// guaranteed to be minimal when crossing edges have distinct weights.
///
/// # Errors
/// Returns [`MstError::NotConnected`] for disconnected graphs.
pub fn boruvka(graph: &Graph) -> Result<SpanningTree, MstError> {
    compute_mst(graph, MstAlgorithm::Boruvka)
}

#[cfg(test)]
mod property;
