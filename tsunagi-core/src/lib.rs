//! Tsunagi core library.
//!
//! Generates random connected weighted graphs and computes their minimum
//! spanning trees with Kruskal's, Prim's, or Borůvka's algorithm.
//!
//! ```
//! use tsunagi_core::{GeneratorParams, GraphGenerator, MstAlgorithm, compute_mst, stats};
//!
//! let params = GeneratorParams::new(8, 0.3)?.with_rng_seed(7);
//! let generation = GraphGenerator::new(params).generate()?;
//! let tree = compute_mst(generation.graph(), MstAlgorithm::Kruskal)?;
//!
//! assert_eq!(tree.len(), 7);
//! assert!(stats(generation.graph()).is_connected());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod graph;
mod mst;
mod stats;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{Result, TsunagiError, TsunagiErrorCode},
    generator::{
        DEFAULT_MAX_ATTEMPTS, EdgeSampler, Generation, GenerationStalled, GeneratorParams,
        GraphGenerator, MAX_EDGE_PROBABILITY, MAX_WEIGHT, MIN_WEIGHT, PROBABILITY_STEP, generate,
        probability_for_attempt,
    },
    graph::{
        DirectedEdge, Graph, GraphBuilder, GraphError, GraphErrorCode, Neighbour, NodeId,
        UndirectedEdge, Weight,
    },
    mst::{
        MstAlgorithm, MstEdge, MstError, MstErrorCode, SpanningTree, boruvka, compute_mst,
        kruskal, prim,
    },
    stats::{GraphStats, TreeStats, stats},
};
