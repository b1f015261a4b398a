use tsunagi_core::{EdgeSampler, Graph, GraphBuilder, Weight};

/// Rejects the first `remaining` pair decisions, then includes every pair
/// with a fixed weight.
pub struct RejectFirst {
    remaining: usize,
    weight: Weight,
}

impl RejectFirst {
    #[must_use]
    pub fn new(remaining: usize, weight: Weight) -> Self {
        Self { remaining, weight }
    }
}

impl EdgeSampler for RejectFirst {
    fn include_pair(&mut self, _edge_probability: f64) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }

    fn draw_weight(&mut self) -> Weight {
        self.weight
    }
}

/// Builds a graph from `(source, target, weight)` triples.
#[must_use]
pub fn graph_from(node_count: usize, edges: &[(usize, usize, Weight)]) -> Graph {
    let mut builder = GraphBuilder::new(node_count);
    for &(source, target, weight) in edges {
        builder
            .add_edge(source, target, weight)
            .expect("test edges must be valid");
    }
    builder.build().expect("test graphs must have nodes")
}
