//! Random connected graph generation.
//!
//! Each attempt includes every pair `{i, j}` independently with the current
//! edge probability and draws a weight uniformly from
//! `[MIN_WEIGHT, MAX_WEIGHT]`. A disconnected candidate is discarded and the
//! next attempt starts from scratch with an escalated probability (see
//! [`probability_for_attempt`]). Attempts that are already at the probability
//! cap raise a [`GenerationStalled`] advisory; once the attempt bound is spent
//! generation fails with [`TsunagiError::GenerationFailed`].

mod params;

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    error::{Result, TsunagiError},
    graph::{Graph, GraphBuilder, GraphError, Weight},
};

pub use self::params::{
    DEFAULT_MAX_ATTEMPTS, GeneratorParams, MAX_EDGE_PROBABILITY, PROBABILITY_STEP,
    probability_for_attempt,
};

/// Smallest weight drawn for a generated edge.
pub const MIN_WEIGHT: Weight = 1;

/// Largest weight drawn for a generated edge.
pub const MAX_WEIGHT: Weight = 10;

/// Source of the random decisions made while sampling a candidate graph.
///
/// Every [`rand::Rng`] is an `EdgeSampler`; custom implementations let callers
/// script the inclusion decisions, for example to replay a fixed graph.
pub trait EdgeSampler {
    /// Decides whether a pair is included, given the current edge probability.
    fn include_pair(&mut self, edge_probability: f64) -> bool;

    /// Draws the weight of an included pair.
    fn draw_weight(&mut self) -> Weight;
}

impl<R: Rng + ?Sized> EdgeSampler for R {
    fn include_pair(&mut self, edge_probability: f64) -> bool {
        self.gen_bool(edge_probability)
    }

    fn draw_weight(&mut self) -> Weight {
        self.gen_range(MIN_WEIGHT..=MAX_WEIGHT)
    }
}

/// Advisory raised when a candidate built at the maximum edge probability is
/// still disconnected. Generation keeps retrying after it is raised.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationStalled {
    /// One-based number of the attempt that stalled.
    pub attempt: usize,
    /// Edge probability used by that attempt.
    pub edge_probability: f64,
}

impl fmt::Display for GenerationStalled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attempt {} produced a disconnected graph at edge probability {}; retrying",
            self.attempt, self.edge_probability
        )
    }
}

/// Outcome of a successful generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
    graph: Graph,
    attempts: usize,
    edge_probability: f64,
    stalls: Vec<GenerationStalled>,
}

impl Generation {
    /// Returns the connected graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the record and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Returns how many candidates were sampled, including the accepted one.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Returns the edge probability of the accepted attempt.
    #[must_use]
    pub fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Returns the advisories raised before the accepted attempt.
    #[must_use]
    pub fn stalls(&self) -> &[GenerationStalled] {
        &self.stalls
    }
}

/// Samples connected graphs according to [`GeneratorParams`].
///
/// # Examples
/// ```
/// use tsunagi_core::{GeneratorParams, GraphGenerator};
///
/// let params = GeneratorParams::new(12, 0.2)?.with_rng_seed(7);
/// let generation = GraphGenerator::new(params).generate()?;
///
/// assert!(generation.graph().is_connected());
/// assert_eq!(generation.graph().node_count(), 12);
/// # Ok::<(), tsunagi_core::TsunagiError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator {
    params: GeneratorParams,
}

impl GraphGenerator {
    /// Creates a generator from validated parameters.
    #[must_use]
    pub fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Returns the parameters used by this generator.
    #[must_use]
    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Generates a connected graph using an RNG seeded from the configured
    /// seed, or from system entropy when no seed was set.
    ///
    /// # Errors
    /// Returns [`TsunagiError::GenerationFailed`] when every allowed attempt
    /// produced a disconnected graph.
    pub fn generate(&self) -> Result<Generation> {
        let mut rng = match self.params.rng_seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    /// Generates a connected graph drawing every decision from `sampler`.
    ///
    /// # Errors
    /// Returns [`TsunagiError::GenerationFailed`] when every allowed attempt
    /// produced a disconnected graph.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, sampler),
        fields(
            node_count = self.params.node_count(),
            edge_probability = self.params.edge_probability(),
            max_attempts = self.params.max_attempts().get(),
            attempts = field::Empty,
        ),
    )]
    pub fn generate_with<S: EdgeSampler + ?Sized>(&self, sampler: &mut S) -> Result<Generation> {
        let node_count = self.params.node_count();
        let initial = self.params.edge_probability();
        let max_attempts = self.params.max_attempts().get();
        let mut stalls = Vec::new();

        for attempt in 0..max_attempts {
            let edge_probability = probability_for_attempt(initial, attempt);
            let graph = sample_candidate(node_count, edge_probability, sampler)?;
            let attempts = attempt.saturating_add(1);
            record_attempt();

            if graph.is_connected() {
                Span::current().record("attempts", attempts);
                info!(
                    attempts,
                    edge_probability,
                    pairs = graph.undirected_edges().len(),
                    "generated connected graph"
                );
                return Ok(Generation {
                    graph,
                    attempts,
                    edge_probability,
                    stalls,
                });
            }

            if edge_probability >= MAX_EDGE_PROBABILITY {
                let stall = GenerationStalled {
                    attempt: attempts,
                    edge_probability,
                };
                warn!(
                    attempt = stall.attempt,
                    edge_probability, "graph disconnected at maximum edge probability; retrying"
                );
                record_stall();
                stalls.push(stall);
            } else {
                debug!(
                    attempt = attempts,
                    edge_probability,
                    components = graph.component_count(),
                    "discarding disconnected candidate"
                );
            }
        }

        Span::current().record("attempts", max_attempts);
        Err(TsunagiError::GenerationFailed {
            attempts: max_attempts,
            edge_probability: probability_for_attempt(initial, max_attempts.saturating_sub(1)),
        })
    }
}

/// Generates a connected graph with `node_count` nodes and initial edge
/// probability `edge_probability`, using default retry settings and system
/// entropy.
///
/// # Errors
/// Returns [`TsunagiError::InvalidNodeCount`] or
/// [`TsunagiError::InvalidEdgeProbability`] for invalid parameters and
/// [`TsunagiError::GenerationFailed`] when the retry bound is exhausted.
pub fn generate(node_count: usize, edge_probability: f64) -> Result<Generation> {
    GraphGenerator::new(GeneratorParams::new(node_count, edge_probability)?).generate()
}

fn sample_candidate<S: EdgeSampler + ?Sized>(
    node_count: usize,
    edge_probability: f64,
    sampler: &mut S,
) -> core::result::Result<Graph, GraphError> {
    let mut builder = GraphBuilder::new(node_count);
    for source in 0..node_count {
        for target in source.saturating_add(1)..node_count {
            if sampler.include_pair(edge_probability) {
                let weight = sampler.draw_weight();
                builder.add_edge(source, target, weight)?;
            }
        }
    }
    builder.build()
}

#[cfg(feature = "metrics")]
fn record_attempt() {
    metrics::counter!("graph_generation_attempts").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_attempt() {}

#[cfg(feature = "metrics")]
fn record_stall() {
    metrics::counter!("graph_generation_stalls").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_stall() {}
