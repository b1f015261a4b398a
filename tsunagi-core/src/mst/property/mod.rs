//! Property-based tests for the spanning tree algorithms.
//!
//! Checks every algorithm against structural invariants (edge count,
//! acyclicity, spanning, weights drawn from the input), an optimality
//! certificate for the exact algorithms, and run-to-run determinism across
//! graphs with varied weight distributions.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
