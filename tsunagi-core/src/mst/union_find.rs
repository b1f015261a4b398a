//! Array-backed disjoint-set forest shared by Kruskal and Borůvka.
//!
//! `find` compresses paths and `union` links by rank, breaking rank ties
//! towards the smaller root id so results stay deterministic.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
        }
    }

    pub(super) fn components(&self) -> usize {
        self.components
    }

    pub(super) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a set.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.rank[left_root],
            self.rank[right_root],
        );
        self.parent[child] = parent;
        if self.rank[parent] == self.rank[child] {
            self.rank[parent] = self.rank[parent].saturating_add(1);
        }
        self.components -= 1;
        true
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }

    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
