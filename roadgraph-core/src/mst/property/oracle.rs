//! Sequential Kruskal oracle for spanning forest verification.
//!
//! Works directly on the fixture's raw edge list with a plain parent array
//! and no rank heuristic, so it shares no code with the implementation under
//! test.

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Total weight of the forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of trees after all edges are considered.
    pub component_count: usize,
}

/// Computes a minimum spanning forest over `node_count` nodes.
pub(super) fn sequential_kruskal(node_count: u64, edges: &[(u64, u64, f64)]) -> OracleForest {
    let size = node_count as usize;
    let mut sorted: Vec<&(u64, u64, f64)> = edges.iter().collect();
    sorted.sort_by(|left, right| left.2.total_cmp(&right.2));

    let mut parent: Vec<usize> = (0..size).collect();
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for &&(source, target, weight) in &sorted {
        let left = find_root(&mut parent, source as usize);
        let right = find_root(&mut parent, target as usize);
        if left != right {
            parent[right] = left;
            total_weight += weight;
            edge_count += 1;
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count: size - edge_count,
    }
}

/// Path-halving find.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
