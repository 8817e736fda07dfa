use roadgraph_core::{Graph, GraphBuilder, Location, NodeId};

/// Builds a graph from named nodes `0..names.len()` and unit-weight edges.
///
/// Node ids are offset by 100 so tests cannot confuse ids with positions.
#[must_use]
pub fn named_graph(names: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for (index, _) in names.iter().enumerate() {
        builder
            .add_node(id_for(names, names[index]), Location::new(index as f64, 0.0))
            .expect("names are unique");
    }
    for &(source, target) in edges {
        builder
            .add_segment(id_for(names, source), id_for(names, target), 1.0)
            .expect("edge endpoints are named nodes");
    }
    builder.build()
}

/// Resolves a node name to the id `named_graph` gave it.
#[must_use]
pub fn id_for(names: &[&str], name: &str) -> NodeId {
    let index = names
        .iter()
        .position(|candidate| *candidate == name)
        .expect("name must be listed");
    NodeId::new(100 + index as u64)
}
