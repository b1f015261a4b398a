//! Benchmark parameter types and fixtures.

use std::fmt;

use tsunagi_core::{GeneratorParams, Graph, GraphGenerator, MstAlgorithm};

use crate::error::BenchSetupError;

/// Parameters for a graph generation benchmark run.
#[derive(Clone, Debug)]
pub struct GenerateBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Initial edge probability.
    pub edge_probability: f64,
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.node_count, self.edge_probability)
    }
}

impl GenerateBenchParams {
    /// Generates the graph described by these parameters from `seed`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Generation`] if the parameters are invalid
    /// or no connected graph was produced within the default attempt budget.
    pub fn generate(&self, seed: u64) -> Result<Graph, BenchSetupError> {
        let params = GeneratorParams::new(self.node_count, self.edge_probability)?
            .with_rng_seed(seed);
        Ok(GraphGenerator::new(params).generate()?.into_graph())
    }
}

/// Parameters for a spanning tree benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Algorithm under measurement.
    pub algorithm: MstAlgorithm,
    /// Number of nodes in the input graph.
    pub node_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/n={}", self.algorithm, self.node_count)
    }
}
