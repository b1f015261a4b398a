//! Minimum spanning tree benchmarks.
//!
//! Measures Kruskal, Prim, and Borůvka on the same seeded graphs so the
//! algorithms can be compared directly. Graph generation happens during
//! setup and is excluded from the timings.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use tsunagi_benches::{
    error::BenchSetupError,
    params::{GenerateBenchParams, MstBenchParams},
};
use tsunagi_core::{MstAlgorithm, compute_mst};

/// Seed used for all graph generation in this benchmark.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const NODE_COUNTS: &[usize] = &[100, 500, 1_000];

/// Initial edge probability; high enough that every size connects on the
/// first attempt with the fixed seed.
const EDGE_PROBABILITY: f64 = 0.05;

fn mst_algorithms_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("mst");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let graph = GenerateBenchParams {
            node_count,
            edge_probability: EDGE_PROBABILITY,
        }
        .generate(SEED)?;

        for algorithm in MstAlgorithm::ALL {
            // Fail setup rather than timing the error path.
            let _tree = compute_mst(&graph, algorithm)?;

            let bench_params = MstBenchParams {
                algorithm,
                node_count,
            };
            group.bench_with_input(
                BenchmarkId::from_parameter(&bench_params),
                &(&graph, algorithm),
                |b, &(graph, algorithm)| {
                    b.iter(|| {
                        let _tree = compute_mst(graph, algorithm);
                    });
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn mst_algorithms(c: &mut Criterion) {
    if let Err(err) = mst_algorithms_impl(c) {
        panic!("mst benchmark setup failed: {err}");
    }
}

criterion_group!(benches, mst_algorithms);
criterion_main!(benches);
