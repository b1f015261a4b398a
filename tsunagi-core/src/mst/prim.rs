//! Heap-based Prim edge selection.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graph::{Graph, NodeId, Weight};

use super::MstEdge;

/// A crossing edge waiting in the frontier; `far` lies outside the tree.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct FrontierEdge {
    weight: Weight,
    sequence: u64,
    near: NodeId,
    far: NodeId,
}

impl FrontierEdge {
    fn into_tree_edge(self) -> MstEdge {
        let (source, target) = if self.near < self.far {
            (self.near, self.far)
        } else {
            (self.far, self.near)
        };
        MstEdge {
            source,
            target,
            weight: self.weight,
            sequence: self.sequence,
        }
    }
}

/// Grows the tree from node `0`. Expects a connected graph.
pub(super) fn select_edges(graph: &Graph) -> Vec<MstEdge> {
    let node_count = graph.node_count();
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));
    if node_count == 0 {
        return accepted;
    }

    let mut in_tree = vec![false; node_count];
    let mut frontier = BinaryHeap::new();
    admit(graph, 0, &mut in_tree, &mut frontier);

    while let Some(Reverse(edge)) = frontier.pop() {
        if in_tree[edge.far] {
            continue;
        }
        accepted.push(edge.into_tree_edge());
        admit(graph, edge.far, &mut in_tree, &mut frontier);
    }

    accepted
}

/// Adds `node` to the tree and pushes its edges towards non-tree nodes.
fn admit(
    graph: &Graph,
    node: NodeId,
    in_tree: &mut [bool],
    frontier: &mut BinaryHeap<Reverse<FrontierEdge>>,
) {
    in_tree[node] = true;
    for neighbour in graph.neighbours(node) {
        if in_tree[neighbour.node()] {
            continue;
        }
        frontier.push(Reverse(FrontierEdge {
            weight: neighbour.weight(),
            sequence: neighbour.sequence(),
            near: node,
            far: neighbour.node(),
        }));
    }
}
