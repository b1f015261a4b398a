//! Round-based component merging (Borůvka).
//!
//! Nominations are gathered against the partition as it stood at the start
//! of the round and applied sequentially; a nomination whose endpoints were
//! already joined by an earlier nomination in the same round is dropped.

use crate::graph::Graph;

use super::{MstEdge, MstError, union_find::DisjointSet};

pub(super) fn select_edges(graph: &Graph) -> Result<Vec<MstEdge>, MstError> {
    let node_count = graph.node_count();
    let mut sets = DisjointSet::new(node_count);
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));

    while sets.components() > 1 {
        let nominations = nominate(graph, &mut sets);
        if nominations.is_empty() {
            return Err(MstError::NotConnected {
                components: sets.components(),
            });
        }

        for edge in nominations {
            if sets.union(edge.source, edge.target) {
                accepted.push(edge);
            }
        }
    }

    Ok(accepted)
}

/// Picks the cheapest outgoing edge of every component, ordered by each
/// component's smallest member.
fn nominate(graph: &Graph, sets: &mut DisjointSet) -> Vec<MstEdge> {
    let roots: Vec<usize> = graph.nodes().map(|node| sets.find(node)).collect();
    let mut cheapest: Vec<Option<MstEdge>> = vec![None; graph.node_count()];
    let mut order = Vec::new();
    let mut listed = vec![false; graph.node_count()];

    for node in graph.nodes() {
        let root = roots[node];
        if !listed[root] {
            listed[root] = true;
            order.push(root);
        }

        for neighbour in graph.neighbours(node) {
            if roots[neighbour.node()] == root {
                continue;
            }
            let improves = cheapest[root].is_none_or(|best| neighbour.weight() < best.weight);
            if improves {
                let (source, target) = if node < neighbour.node() {
                    (node, neighbour.node())
                } else {
                    (neighbour.node(), node)
                };
                cheapest[root] = Some(MstEdge {
                    source,
                    target,
                    weight: neighbour.weight(),
                    sequence: neighbour.sequence(),
                });
            }
        }
    }

    order.into_iter().filter_map(|root| cheapest[root]).collect()
}
