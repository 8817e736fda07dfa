//! Seeded synthetic road networks.
//!
//! Grids model a street layout with some blocks knocked out, which leaves a
//! realistic scattering of cut vertices. Paths are the worst case for the
//! depth of the articulation search.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use roadgraph_core::{Graph, GraphBuilder, Location, NodeId};

use crate::error::BenchSetupError;

/// Configuration for [`grid_network`].
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// Probability that each lattice segment is kept.
    pub keep_probability: f64,
    /// RNG seed for segment removal and weights.
    pub seed: u64,
}

/// Builds a `rows x cols` lattice with random segment removal and weights.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when either dimension is zero.
pub fn grid_network(config: &GridConfig) -> Result<Graph, BenchSetupError> {
    if config.rows == 0 {
        return Err(BenchSetupError::ZeroValue { context: "rows" });
    }
    if config.cols == 0 {
        return Err(BenchSetupError::ZeroValue { context: "cols" });
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let node_count = config.rows.saturating_mul(config.cols);
    let mut builder = GraphBuilder::with_capacity(node_count, node_count.saturating_mul(2));
    let id = |row: usize, col: usize| NodeId::new((row * config.cols + col) as u64);

    for row in 0..config.rows {
        for col in 0..config.cols {
            builder.add_node(id(row, col), Location::new(col as f64, row as f64))?;
        }
    }
    for row in 0..config.rows {
        for col in 0..config.cols {
            if col + 1 < config.cols && rng.gen_bool(config.keep_probability) {
                builder.add_segment(id(row, col), id(row, col + 1), rng.gen_range(1.0..10.0))?;
            }
            if row + 1 < config.rows && rng.gen_bool(config.keep_probability) {
                builder.add_segment(id(row, col), id(row + 1, col), rng.gen_range(1.0..10.0))?;
            }
        }
    }
    Ok(builder.build())
}

/// Builds a unit-weight path `0 - 1 - ... - (length - 1)`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `length` is zero.
pub fn path_network(length: usize) -> Result<Graph, BenchSetupError> {
    if length == 0 {
        return Err(BenchSetupError::ZeroValue { context: "length" });
    }
    let mut builder = GraphBuilder::with_capacity(length, length - 1);
    for index in 0..length as u64 {
        builder.add_node(NodeId::new(index), Location::new(index as f64, 0.0))?;
        if index > 0 {
            builder.add_segment(NodeId::new(index - 1), NodeId::new(index), 1.0)?;
        }
    }
    Ok(builder.build())
}
