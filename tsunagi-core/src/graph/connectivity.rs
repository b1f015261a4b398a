//! Breadth-first reachability over the undirected view of a [`Graph`].
//!
//! The directed form is symmetric, so reachability from one node along
//! outgoing edges is the same as undirected connectivity.

use std::collections::VecDeque;

use super::{Graph, NodeId};

/// Returns `true` when a traversal from `start` visits every node.
pub(super) fn reaches_all(graph: &Graph, start: NodeId) -> bool {
    if start >= graph.node_count() {
        return false;
    }
    let mut visited = vec![false; graph.node_count()];
    flood(graph, start, &mut visited) == graph.node_count()
}

/// Counts connected components by flooding from every unvisited node.
pub(super) fn component_count(graph: &Graph) -> usize {
    let mut visited = vec![false; graph.node_count()];
    let mut components = 0;
    for node in graph.nodes() {
        if visited[node] {
            continue;
        }
        flood(graph, node, &mut visited);
        components += 1;
    }
    components
}

/// Marks every node reachable from `start` and returns how many were newly
/// visited.
fn flood(graph: &Graph, start: NodeId, visited: &mut [bool]) -> usize {
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    let mut reached = 1;

    while let Some(node) = queue.pop_front() {
        for neighbour in graph.neighbours(node) {
            let next = neighbour.node();
            if !visited[next] {
                visited[next] = true;
                reached += 1;
                queue.push_back(next);
            }
        }
    }

    reached
}
