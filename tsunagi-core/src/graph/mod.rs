//! Weighted graph store shared by the generator, the MST engine, and the
//! statistics calculator.
//!
//! A [`Graph`] keeps one adjacency list per node. Every undirected pair is
//! stored once in discovery order and mirrored into both endpoints' adjacency
//! lists with the same weight, so the directed view is symmetric by
//! construction. Graphs are immutable once built; use [`GraphBuilder`] to
//! assemble one by hand or [`crate::GraphGenerator`] to sample a connected one.

mod builder;
mod connectivity;

use std::ops::Range;

use crate::error::define_error_codes;

pub use self::builder::GraphBuilder;

/// Identifier of a node; graphs with `n` nodes use ids in `[0, n)`.
pub type NodeId = usize;

/// Integer edge weight.
pub type Weight = u32;

/// Errors raised while assembling a [`Graph`].
#[derive(Clone, Debug, Eq, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// The caller requested a graph without nodes.
    #[error("a graph needs at least one node")]
    EmptyGraph,
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id referenced by the edge.
        node: NodeId,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// Self-loops cannot appear in a spanning tree and are rejected.
    #[error("self-loop on node {node}")]
    SelfLoop {
        /// Node referenced by both endpoints.
        node: NodeId,
    },
    /// The unordered pair was already inserted.
    #[error("edge ({low}, {high}) was already added")]
    DuplicateEdge {
        /// The smaller endpoint id.
        low: NodeId,
        /// The larger endpoint id.
        high: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The caller requested a graph without nodes.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge referenced a node id that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
        /// Self-loops are rejected.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The unordered pair was already inserted.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
    }
}

/// Adjacency entry pointing from one node to a neighbour.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Neighbour {
    node: NodeId,
    weight: Weight,
    sequence: u64,
}

impl Neighbour {
    /// Returns the neighbouring node id.
    #[must_use]
    #[rustfmt::skip]
    pub fn node(&self) -> NodeId { self.node }

    /// Returns the weight shared by both directions of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns the discovery sequence of the underlying undirected pair.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> u64 { self.sequence }
}

/// One direction of a stored pair.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DirectedEdge {
    /// Node the edge leaves.
    pub source: NodeId,
    /// Node the edge enters.
    pub target: NodeId,
    /// Edge weight, identical to the reverse direction.
    pub weight: Weight,
}

/// An undirected pair in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UndirectedEdge {
    source: NodeId,
    target: NodeId,
    weight: Weight,
    sequence: u64,
}

impl UndirectedEdge {
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

    /// Returns the position at which the pair was added to the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> u64 { self.sequence }
}

/// Immutable weighted graph with a symmetric directed view.
///
/// # Examples
/// ```
/// use tsunagi_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(0, 1, 4)?;
/// builder.add_edge(1, 2, 7)?;
/// let graph = builder.build()?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.directed_edge_count(), 4);
/// assert_eq!(graph.weight(2, 1), Some(7));
/// assert!(graph.is_connected());
/// # Ok::<(), tsunagi_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Neighbour>>,
    edges: Vec<UndirectedEdge>,
}

impl Graph {
    pub(crate) fn from_parts(adjacency: Vec<Vec<Neighbour>>, edges: Vec<UndirectedEdge>) -> Self {
        Self { adjacency, edges }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the node ids in ascending order.
    #[must_use]
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.node_count()
    }

    /// Returns the adjacency list of `node` in insertion order, or an empty
    /// slice for ids outside the graph.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> &[Neighbour] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Returns the weight of the directed edge `(source, target)`, if present.
    #[must_use]
    pub fn weight(&self, source: NodeId, target: NodeId) -> Option<Weight> {
        self.neighbours(source)
            .iter()
            .find(|neighbour| neighbour.node == target)
            .map(|neighbour| neighbour.weight)
    }

    /// Iterates over every directed edge, grouped by source id and then in
    /// insertion order.
    pub fn directed_edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, neighbours)| {
                neighbours.iter().map(move |neighbour| DirectedEdge {
                    source,
                    target: neighbour.node,
                    weight: neighbour.weight,
                })
            })
    }

    /// Returns the number of directed edges (twice the number of pairs).
    #[must_use]
    pub fn directed_edge_count(&self) -> usize {
        self.edges.len().saturating_mul(2)
    }

    /// Returns the undirected view: one canonical edge per pair, in
    /// discovery order.
    #[must_use]
    pub fn undirected_edges(&self) -> &[UndirectedEdge] {
        &self.edges
    }

    /// Returns the number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        connectivity::component_count(self)
    }

    /// Returns `true` when every node is reachable from every other node.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        connectivity::reaches_all(self, 0)
    }
}
