use nebula_core::{Graph, NebulaError, NodeId};

/// Initializes `env_logger` once per test binary so `RUST_LOG=debug` shows backward traces.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a fresh graph with one leaf per value.
#[allow(dead_code)]
pub fn graph_with_leaves(values: &[f64]) -> (Graph, Vec<NodeId>) {
    let mut graph = Graph::new();
    let leaves = values.iter().map(|&v| graph.leaf(v)).collect();
    (graph, leaves)
}

/// d = ((a * b) + c)^2 on fresh leaves `a`, `b` and the literal `c`.
#[allow(dead_code)]
pub fn squared_affine(graph: &mut Graph, a: NodeId, b: NodeId, c: f64) -> Result<NodeId, NebulaError> {
    let ab = graph.mul(a, b)?;
    let shifted = graph.add(ab, c)?;
    graph.pow(shifted, 2)
}
