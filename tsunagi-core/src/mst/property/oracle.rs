//! Reference checks for spanning tree optimality.
//!
//! [`brute_force_minimum`] enumerates every edge subset of size `n - 1` and
//! is only usable on tiny graphs. [`check_cycle_optimality`] applies the
//! cycle property instead: a spanning tree is minimal exactly when every
//! non-tree edge is at least as heavy as each tree edge on the path it
//! closes.

use std::collections::VecDeque;

use crate::graph::{Graph, NodeId, Weight};

use super::super::SpanningTree;

/// Largest edge count accepted by [`brute_force_minimum`].
pub(super) const BRUTE_FORCE_MAX_EDGES: usize = 20;

/// Returns the minimum spanning tree weight by exhaustive search, or `None`
/// when the graph is disconnected or too large to enumerate.
pub(super) fn brute_force_minimum(graph: &Graph) -> Option<u64> {
    let edges = graph.undirected_edges();
    if edges.len() > BRUTE_FORCE_MAX_EDGES {
        return None;
    }
    let wanted = graph.node_count() - 1;
    if wanted == 0 {
        return Some(0);
    }

    let mut best: Option<u64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let mut parent: Vec<NodeId> = graph.nodes().collect();
        let mut weight = 0_u64;
        let mut acyclic = true;
        for (index, edge) in edges.iter().enumerate() {
            if mask & (1 << index) == 0 {
                continue;
            }
            let ra = find_root(&mut parent, edge.source());
            let rb = find_root(&mut parent, edge.target());
            if ra == rb {
                acyclic = false;
                break;
            }
            parent[rb] = ra;
            weight += u64::from(edge.weight());
        }
        if acyclic {
            best = Some(best.map_or(weight, |current| current.min(weight)));
        }
    }
    best
}

/// Verifies the cycle property for every non-tree edge of `graph`.
pub(super) fn check_cycle_optimality(graph: &Graph, tree: &SpanningTree) -> Result<(), String> {
    let mut tree_adjacency: Vec<Vec<(NodeId, Weight)>> = vec![Vec::new(); graph.node_count()];
    for edge in tree.edges() {
        tree_adjacency[edge.source()].push((edge.target(), edge.weight()));
        tree_adjacency[edge.target()].push((edge.source(), edge.weight()));
    }

    for edge in graph.undirected_edges() {
        if tree.contains(edge.source(), edge.target()) {
            continue;
        }
        let heaviest = heaviest_on_path(&tree_adjacency, edge.source(), edge.target())
            .ok_or_else(|| {
                format!(
                    "tree has no path between {} and {}",
                    edge.source(),
                    edge.target()
                )
            })?;
        if heaviest > edge.weight() {
            return Err(format!(
                "non-tree edge ({}, {}) weighs {} but the tree path carries {heaviest}",
                edge.source(),
                edge.target(),
                edge.weight(),
            ));
        }
    }
    Ok(())
}

/// Heaviest edge weight on the unique tree path from `from` to `to`.
fn heaviest_on_path(
    tree_adjacency: &[Vec<(NodeId, Weight)>],
    from: NodeId,
    to: NodeId,
) -> Option<Weight> {
    let mut heaviest: Vec<Option<Weight>> = vec![None; tree_adjacency.len()];
    let mut visited = vec![false; tree_adjacency.len()];
    let mut queue = VecDeque::from([from]);
    visited[from] = true;
    heaviest[from] = Some(0);

    while let Some(node) = queue.pop_front() {
        if node == to {
            return heaviest[node];
        }
        let so_far = heaviest[node].unwrap_or(0);
        for &(next, weight) in &tree_adjacency[node] {
            if !visited[next] {
                visited[next] = true;
                heaviest[next] = Some(so_far.max(weight));
                queue.push_back(next);
            }
        }
    }
    None
}

/// Path-halving find over a bare parent array.
pub(super) fn find_root(parent: &mut [NodeId], mut node: NodeId) -> NodeId {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
