//! Benchmark setup error type.
//!
//! Lets setup functions propagate generation and spanning tree failures with
//! `?` instead of using `.expect()`.

use tsunagi_core::{MstError, TsunagiError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Parameter validation or graph generation failed.
    #[error("graph generation failed: {0}")]
    Generation(#[from] TsunagiError),
    /// Spanning tree computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
