//! Roadgraph core library.
//!
//! Analyses weighted, undirected road networks. Two algorithms are provided:
//!
//! - an explicit-stack articulation point (cut vertex) search that sweeps
//!   every connected component, and
//! - a Kruskal minimum spanning forest built over a rank-weighted union-find.
//!
//! Both borrow an immutable [`Graph`] topology and keep their per-run state
//! in their own side tables, so they can run concurrently. Results are
//! written back to the graph's [`Highlights`] table for renderers.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled, [`Analyzer::run`] emits:
//!
//! - `roadgraph_analysis_runs` (counter)
//! - `roadgraph_articulation_points` (counter)
//! - `roadgraph_forest_trees` (gauge)
//! - `roadgraph_analysis_seconds` (histogram, seconds)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod articulation;
mod builder;
mod error;
mod graph;
mod mst;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    analysis::{AnalysisReport, Analyzer, run_articulation_search, run_minimum_spanning_forest},
    articulation::ArticulationPoints,
    builder::{AnalyzerBuilder, ExecutionStrategy},
    error::{AnalysisError, AnalysisErrorCode, GraphError, GraphErrorCode, Result},
    graph::{Adjacency, Graph, GraphBuilder, Highlights, Location, Node, NodeId, Segment, SegmentId},
    mst::{DisjointForest, SpanningForest, UnionOutcome},
};
