//! Benchmark support crate for tsunagi.
//!
//! Provides parameter types and seeded graph fixtures used by the Criterion
//! benchmarks for graph generation and the three spanning tree algorithms.

pub mod error;
pub mod params;
