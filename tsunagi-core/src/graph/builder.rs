//! Incremental construction of [`Graph`] values.

use std::collections::HashSet;

use super::{Graph, GraphError, Neighbour, NodeId, UndirectedEdge, Weight};

/// Collects undirected pairs and validates them before producing a [`Graph`].
///
/// Each accepted pair becomes two directed edges with the same weight and is
/// tagged with a monotonically increasing discovery sequence.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    node_count: usize,
    adjacency: Vec<Vec<Neighbour>>,
    edges: Vec<UndirectedEdge>,
    seen: HashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `node_count` nodes and no edges.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Returns the number of nodes the built graph will have.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of pairs accepted so far.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds the pair `{source, target}` with `weight` in both directions.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] when an endpoint is out of range,
    /// [`GraphError::SelfLoop`] when both endpoints coincide, and
    /// [`GraphError::DuplicateEdge`] when the pair was already added.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: Weight,
    ) -> Result<&mut Self, GraphError> {
        for node in [source, target] {
            if node >= self.node_count {
                return Err(GraphError::InvalidNodeId {
                    node,
                    node_count: self.node_count,
                });
            }
        }
        if source == target {
            return Err(GraphError::SelfLoop { node: source });
        }

        let (low, high) = if source < target {
            (source, target)
        } else {
            (target, source)
        };
        if !self.seen.insert((low, high)) {
            return Err(GraphError::DuplicateEdge { low, high });
        }

        let sequence = self.edges.len() as u64;
        self.edges.push(UndirectedEdge {
            source: low,
            target: high,
            weight,
            sequence,
        });
        self.adjacency[source].push(Neighbour {
            node: target,
            weight,
            sequence,
        });
        self.adjacency[target].push(Neighbour {
            node: source,
            weight,
            sequence,
        });
        Ok(self)
    }

    /// Finalises the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when the builder was created with
    /// zero nodes.
    pub fn build(self) -> Result<Graph, GraphError> {
        if self.node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Graph::from_parts(self.adjacency, self.edges))
    }
}
