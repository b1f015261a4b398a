//! Parameter handling for random graph generation.

use std::num::NonZeroUsize;

use crate::error::{Result, TsunagiError};

/// Amount added to the edge probability after each disconnected attempt.
pub const PROBABILITY_STEP: f64 = 0.1;

/// Upper bound for the escalated edge probability.
pub const MAX_EDGE_PROBABILITY: f64 = 1.0;

/// Default number of candidate graphs sampled before giving up.
pub const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(value) => value,
    None => panic!("default attempt bound must be non-zero"),
};

/// Validated configuration for [`crate::GraphGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorParams {
    node_count: usize,
    edge_probability: f64,
    max_attempts: NonZeroUsize,
    rng_seed: Option<u64>,
}

impl GeneratorParams {
    /// Creates a parameter set for `node_count` nodes where each pair is
    /// included with probability `edge_probability`.
    ///
    /// # Errors
    /// Returns [`TsunagiError::InvalidNodeCount`] when `node_count` is zero and
    /// [`TsunagiError::InvalidEdgeProbability`] when `edge_probability` is not
    /// a finite value in `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use tsunagi_core::GeneratorParams;
    ///
    /// let params = GeneratorParams::new(10, 0.3)?;
    /// assert_eq!(params.node_count(), 10);
    /// assert!(GeneratorParams::new(0, 0.3).is_err());
    /// assert!(GeneratorParams::new(10, 1.5).is_err());
    /// # Ok::<(), tsunagi_core::TsunagiError>(())
    /// ```
    pub fn new(node_count: usize, edge_probability: f64) -> Result<Self> {
        if node_count == 0 {
            return Err(TsunagiError::InvalidNodeCount { got: node_count });
        }
        if !(0.0..=MAX_EDGE_PROBABILITY).contains(&edge_probability) {
            return Err(TsunagiError::InvalidEdgeProbability {
                got: edge_probability,
            });
        }
        Ok(Self {
            node_count,
            edge_probability,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng_seed: None,
        })
    }

    /// Caps how many candidate graphs are sampled before generation fails.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: NonZeroUsize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Seeds the internal RNG to make generation deterministic.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the number of nodes in generated graphs.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the edge probability used by the first attempt.
    #[must_use]
    pub fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Returns the retry bound.
    #[must_use]
    pub fn max_attempts(&self) -> NonZeroUsize {
        self.max_attempts
    }

    /// Returns the RNG seed, if one was configured.
    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

/// Edge probability used by the zero-based `attempt`.
///
/// Escalates `initial` by [`PROBABILITY_STEP`] per previous attempt and caps
/// the result at [`MAX_EDGE_PROBABILITY`].
///
/// # Examples
/// ```
/// use tsunagi_core::probability_for_attempt;
///
/// assert_eq!(probability_for_attempt(0.25, 0), 0.25);
/// assert!((probability_for_attempt(0.25, 2) - 0.45).abs() < 1e-12);
/// assert_eq!(probability_for_attempt(0.25, 100), 1.0);
/// ```
#[must_use]
pub fn probability_for_attempt(initial: f64, attempt: usize) -> f64 {
    let steps = u32::try_from(attempt).unwrap_or(u32::MAX);
    (initial + PROBABILITY_STEP * f64::from(steps)).min(MAX_EDGE_PROBABILITY)
}
