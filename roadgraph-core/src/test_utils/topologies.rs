//! Seeded graph generators shared by the property suites.
//!
//! Each generator produces a [`GraphFixture`] whose edges reference nodes
//! `0..node_count`. Topologies are chosen to stress different parts of the
//! analysis: trees are full of cut vertices, dense graphs have none, and
//! disconnected graphs exercise the outer component sweep.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

use super::graph_from_edges;

/// Minimum node count for generated graphs.
const MIN_NODES: u64 = 4;
/// Maximum node count for most generated graphs.
const MAX_NODES: u64 = 40;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: u64 = 16;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Topology {
    /// A random spanning tree; every internal node is a cut vertex.
    Tree,
    /// A spanning tree plus a handful of extra edges.
    Sparse,
    /// Most node pairs connected.
    Dense,
    /// Few distinct weights, stressing Kruskal tie-breaking.
    IdenticalWeights,
    /// Several components with no edges between them.
    Disconnected,
    /// A sparse graph with self-loops and isolated nodes added.
    Decorated,
}

/// Generated graph plus the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    /// Number of nodes; ids are `0..node_count`.
    pub node_count: u64,
    /// Undirected weighted edges in insertion order.
    pub edges: Vec<(u64, u64, f64)>,
    /// Generator that produced the fixture.
    pub topology: Topology,
}

impl GraphFixture {
    /// Materialises the fixture as a [`Graph`].
    pub(crate) fn graph(&self) -> Graph {
        graph_from_edges(self.node_count, &self.edges)
    }
}

/// Samples fixtures across every topology.
pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for a specific topology.
pub(crate) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    match topology {
        Topology::Tree => generate_tree(rng),
        Topology::Sparse => generate_sparse(rng),
        Topology::Dense => generate_dense(rng),
        Topology::IdenticalWeights => generate_identical_weights(rng),
        Topology::Disconnected => generate_disconnected(rng),
        Topology::Decorated => generate_decorated(rng),
    }
}

/// Accumulates edges for a fixture.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<(u64, u64, f64)>,
}

impl EdgeBuilder {
    fn push(&mut self, source: u64, target: u64, weight: f64) {
        self.edges.push((source, target, weight));
    }

    /// Connects `offset..offset + size` with a random recursive tree.
    fn random_tree(&mut self, offset: u64, size: u64, rng: &mut SmallRng) {
        let mut perm: Vec<u64> = (offset..offset + size).collect();
        shuffle(&mut perm, rng);
        for i in 1..perm.len() {
            let parent = perm[rng.gen_range(0..i)];
            self.push(parent, perm[i], random_weight(rng));
        }
    }

    /// Adds up to `count` random non-loop edges inside `offset..offset + size`.
    fn random_extras(&mut self, offset: u64, size: u64, count: u64, rng: &mut SmallRng) {
        if size < 2 {
            return;
        }
        for _ in 0..count {
            let source = offset + rng.gen_range(0..size);
            let target = offset + rng.gen_range(0..size);
            if source != target {
                self.push(source, target, random_weight(rng));
            }
        }
    }
}

fn generate_tree(rng: &mut SmallRng) -> GraphFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut builder = EdgeBuilder::default();
    builder.random_tree(0, node_count, rng);
    GraphFixture {
        node_count,
        edges: builder.edges,
        topology: Topology::Tree,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut builder = EdgeBuilder::default();
    builder.random_tree(0, node_count, rng);
    let extras = rng.gen_range(1..=node_count / 2);
    builder.random_extras(0, node_count, extras, rng);
    GraphFixture {
        node_count,
        edges: builder.edges,
        topology: Topology::Sparse,
    }
}

fn generate_probabilistic(
    rng: &mut SmallRng,
    max_nodes: u64,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> (u64, Vec<(u64, u64, f64)>) {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut builder = EdgeBuilder::default();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(probability) {
                let value = weight(rng);
                builder.push(source, target, value);
            }
        }
    }
    if builder.edges.is_empty() {
        let value = weight(rng);
        builder.push(0, 1, value);
    }
    (node_count, builder.edges)
}

fn generate_dense(rng: &mut SmallRng) -> GraphFixture {
    let (node_count, edges) = generate_probabilistic(rng, DENSE_MAX_NODES, (0.5, 0.9), random_weight);
    GraphFixture {
        node_count,
        edges,
        topology: Topology::Dense,
    }
}

fn generate_identical_weights(rng: &mut SmallRng) -> GraphFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=5)))
        .collect();
    let (node_count, edges) = generate_probabilistic(rng, MAX_NODES, (0.08, 0.3), move |r| {
        pool[r.gen_range(0..pool.len())]
    });
    GraphFixture {
        node_count,
        edges,
        topology: Topology::IdenticalWeights,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let component_count = rng.gen_range(2..=5);
    let mut builder = EdgeBuilder::default();
    let mut offset = 0;
    for _ in 0..component_count {
        let size = rng.gen_range(1..=9);
        builder.random_tree(offset, size, rng);
        let extras = rng.gen_range(0..=size / 2);
        builder.random_extras(offset, size, extras, rng);
        offset += size;
    }
    GraphFixture {
        node_count: offset,
        edges: builder.edges,
        topology: Topology::Disconnected,
    }
}

fn generate_decorated(rng: &mut SmallRng) -> GraphFixture {
    let connected = rng.gen_range(MIN_NODES..=MAX_NODES);
    let isolated = rng.gen_range(1..=3);
    let node_count = connected + isolated;
    let mut builder = EdgeBuilder::default();
    builder.random_tree(0, connected, rng);
    let extras = rng.gen_range(0..=connected / 3);
    builder.random_extras(0, connected, extras, rng);
    for _ in 0..rng.gen_range(1..=4) {
        let node = rng.gen_range(0..node_count);
        builder.push(node, node, random_weight(rng));
    }
    GraphFixture {
        node_count,
        edges: builder.edges,
        topology: Topology::Decorated,
    }
}

fn random_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [u64], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Trees and disconnected graphs are the interesting cases for the cut vertex
// search, so they are sampled more often.
impl proptest::arbitrary::Arbitrary for Topology {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            3 => Just(Self::Tree),
            3 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::IdenticalWeights),
            3 => Just(Self::Disconnected),
            2 => Just(Self::Decorated),
        ]
    }
}
