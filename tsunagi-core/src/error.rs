//! Error types for the Tsunagi core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use thiserror::Error;

use crate::{
    graph::{GraphError, GraphErrorCode},
    mst::{MstError, MstErrorCode},
};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Error type produced when configuring or running graph generation and the
/// operations built on top of it.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TsunagiError {
    /// Graphs need at least one node.
    #[error("node_count must be at least 1 (got {got})")]
    InvalidNodeCount {
        /// The invalid node count supplied by the caller.
        got: usize,
    },
    /// Edge probability must be a finite value in `[0, 1]`.
    #[error("edge_probability must lie in [0, 1] (got {got})")]
    InvalidEdgeProbability {
        /// The invalid probability supplied by the caller.
        got: f64,
    },
    /// Every attempt allowed by the retry bound produced a disconnected graph.
    #[error(
        "no connected graph after {attempts} attempts (final edge_probability {edge_probability})"
    )]
    GenerationFailed {
        /// Number of candidate graphs that were built and discarded.
        attempts: usize,
        /// Edge probability used by the final attempt.
        edge_probability: f64,
    },
    /// Building a [`crate::Graph`] failed validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Computing a spanning tree failed.
    #[error(transparent)]
    Mst(#[from] MstError),
}

define_error_codes! {
    /// Stable codes describing [`TsunagiError`] variants.
    enum TsunagiErrorCode for TsunagiError {
        /// Graphs need at least one node.
        InvalidNodeCount => InvalidNodeCount { .. } => "TSUNAGI_INVALID_NODE_COUNT",
        /// Edge probability must be a finite value in `[0, 1]`.
        InvalidEdgeProbability => InvalidEdgeProbability { .. } => "TSUNAGI_INVALID_EDGE_PROBABILITY",
        /// Every attempt allowed by the retry bound produced a disconnected graph.
        GenerationFailed => GenerationFailed { .. } => "TSUNAGI_GENERATION_FAILED",
        /// Building a graph failed validation.
        GraphFailure => Graph(..) => "TSUNAGI_GRAPH_FAILURE",
        /// Computing a spanning tree failed.
        MstFailure => Mst(..) => "TSUNAGI_MST_FAILURE",
    }
}

impl TsunagiError {
    /// Returns `true` for errors caused by invalid caller-supplied parameters.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidNodeCount { .. } | Self::InvalidEdgeProbability { .. }
        )
    }

    /// Retrieve the inner [`GraphErrorCode`] when graph validation failed.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`MstErrorCode`] when spanning tree computation failed.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Mst(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TsunagiError>;
