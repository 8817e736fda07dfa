//! Error types for the roadgraph core library.
//!
//! Defines the graph construction and analysis error enums exposed by the
//! public API, their stable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::{
    builder::ExecutionStrategy,
    graph::{NodeId, SegmentId},
};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
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
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while assembling a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A segment referenced a node that is not present in the graph.
    #[error("segment {segment} references node {node}, which is not in the graph")]
    DanglingSegment {
        /// Segment whose endpoint could not be resolved.
        segment: SegmentId,
        /// The missing endpoint.
        node: NodeId,
    },
    /// A node identifier was registered twice.
    #[error("node {node} is already present in the graph")]
    DuplicateNode {
        /// The repeated identifier.
        node: NodeId,
    },
    /// A segment weight was negative, NaN or infinite.
    #[error("segment {segment} has invalid weight {weight}; weights must be finite and non-negative")]
    InvalidWeight {
        /// Segment carrying the invalid weight.
        segment: SegmentId,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A segment referenced a node that is not present in the graph.
        DanglingSegment => DanglingSegment { .. } => "GRAPH_DANGLING_SEGMENT",
        /// A node identifier was registered twice.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// A segment weight was negative, NaN or infinite.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
    }
}

/// Error type produced when configuring or running an [`crate::Analyzer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AnalysisError {
    /// The selected root is not a node of the analysed graph.
    #[error("selected root {root} is not a node of the graph")]
    UnknownRoot {
        /// Identifier supplied as the sweep root.
        root: NodeId,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`AnalysisError`] variants.
    enum AnalysisErrorCode for AnalysisError {
        /// The selected root is not a node of the analysed graph.
        UnknownRoot => UnknownRoot { .. } => "ANALYSIS_UNKNOWN_ROOT",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "ANALYSIS_BACKEND_UNAVAILABLE",
    }
}

/// Convenient alias for results returned by the analysis API.
pub type Result<T> = core::result::Result<T, AnalysisError>;
