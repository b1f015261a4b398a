//! Sequential Kruskal edge selection.

use crate::graph::Graph;

use super::{MstEdge, union_find::DisjointSet};

/// Returns the accepted edges in acceptance order. Expects a connected graph.
pub(super) fn select_edges(graph: &Graph) -> Vec<MstEdge> {
    let mut edge_list: Vec<MstEdge> = graph
        .undirected_edges()
        .iter()
        .map(MstEdge::from)
        .collect();
    // `MstEdge` orders by weight first and discovery sequence second.
    edge_list.sort_unstable();

    let wanted = graph.node_count().saturating_sub(1);
    let mut sets = DisjointSet::new(graph.node_count());
    let mut accepted = Vec::with_capacity(wanted);

    for edge in edge_list {
        if accepted.len() == wanted {
            break;
        }
        if sets.union(edge.source, edge.target) {
            accepted.push(edge);
        }
    }

    accepted
}
