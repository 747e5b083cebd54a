use thiserror::Error;

/// Custom error type for the Nebula autodiff engine.
///
/// Numeric domain problems (division by zero, logarithm of a negative
/// number) are not errors: they surface as non-finite values. Only
/// structural misuse of the arena is reported here.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NebulaError {
    #[error("Node #{index} belongs to graph {node_graph}, not to graph {graph}")]
    ForeignNode {
        index: usize,
        node_graph: u64,
        graph: u64,
    },

    #[error("Node #{index} out of bounds for a graph of {len} nodes")]
    NodeOutOfBounds { index: usize, len: usize },
}
