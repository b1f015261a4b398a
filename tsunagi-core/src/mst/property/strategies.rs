//! Strategy builders for MST property-based tests.
//!
//! Every generator starts from a random spanning path, so fixtures are
//! always connected, then layers extra pairs on top and assigns weights
//! according to the chosen [`WeightDistribution`].

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::{GraphBuilder, NodeId, Weight};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for generated graphs.
const MAX_NODES: usize = 40;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 20;

/// Generates fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (node_count, pairs) = match distribution {
        WeightDistribution::Distinct | WeightDistribution::FewValues => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            let probability = rng.gen_range(0.1..=0.4);
            (node_count, connected_pairs(rng, node_count, probability))
        }
        WeightDistribution::Sparse => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            (node_count, sparse_pairs(rng, node_count))
        }
        WeightDistribution::Dense => {
            let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            let probability = rng.gen_range(0.7..=0.95);
            (node_count, connected_pairs(rng, node_count, probability))
        }
    };

    let weights = assign_weights(distribution, pairs.len(), rng);
    let mut builder = GraphBuilder::new(node_count);
    for (&(source, target), weight) in pairs.iter().zip(weights) {
        builder
            .add_edge(source, target, weight)
            .expect("generated pairs are unique and in range");
    }

    MstFixture {
        graph: builder.build().expect("generated graphs have nodes"),
        distribution,
    }
}

/// Random spanning path plus every other pair with probability `probability`.
fn connected_pairs(
    rng: &mut SmallRng,
    node_count: usize,
    probability: f64,
) -> Vec<(NodeId, NodeId)> {
    let (mut pairs, mut seen) = spanning_path(rng, node_count);
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if !seen.contains(&(i, j)) && rng.gen_bool(probability) {
                seen.insert((i, j));
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Random spanning path plus up to `n / 2` random extra pairs.
fn sparse_pairs(rng: &mut SmallRng, node_count: usize) -> Vec<(NodeId, NodeId)> {
    let (mut pairs, mut seen) = spanning_path(rng, node_count);
    for _ in 0..node_count / 2 {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        if i == j {
            continue;
        }
        let pair = canonical(i, j);
        if seen.insert(pair) {
            pairs.push(pair);
        }
    }
    pairs
}

fn spanning_path(
    rng: &mut SmallRng,
    node_count: usize,
) -> (Vec<(NodeId, NodeId)>, HashSet<(NodeId, NodeId)>) {
    let mut perm: Vec<NodeId> = (0..node_count).collect();
    shuffle(&mut perm, rng);
    let pairs: Vec<_> = perm
        .windows(2)
        .map(|window| canonical(window[0], window[1]))
        .collect();
    let seen = pairs.iter().copied().collect();
    (pairs, seen)
}

fn assign_weights(
    distribution: WeightDistribution,
    edge_count: usize,
    rng: &mut SmallRng,
) -> Vec<Weight> {
    match distribution {
        WeightDistribution::Distinct => {
            let mut weights: Vec<Weight> = (1..).take(edge_count).collect();
            shuffle(&mut weights, rng);
            weights
        }
        WeightDistribution::FewValues => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
            (0..edge_count)
                .map(|_| pool[rng.gen_range(0..pool.len())])
                .collect()
        }
        WeightDistribution::Sparse | WeightDistribution::Dense => {
            (0..edge_count).map(|_| rng.gen_range(1..=10)).collect()
        }
    }
}

fn canonical(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a < b { (a, b) } else { (b, a) }
}

fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
