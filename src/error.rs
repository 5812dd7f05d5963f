use thiserror::Error;

/// Raised when a vertex index escapes `[0, node_count)`.
///
/// Indices are validated at graph construction and at algorithm entry,
/// never inside the algorithm loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph of {nodes} nodes")]
    NodeOutOfRange { node: usize, nodes: usize },

    #[error("edge ({from}, {to}) has an endpoint out of range for a graph of {nodes} nodes")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        nodes: usize,
    },
}
