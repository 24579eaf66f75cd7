//! Error type shared by every entry point.
//!
//! An unreachable destination is *not* an error for the deterministic
//! solvers: they return an empty path with infinite cost. [`PathError`]
//! covers precondition violations detected at the boundary.

/// Errors reported by graph construction, solvers, and the genetic runner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// The graph has zero nodes.
    #[error("graph must contain at least one node")]
    EmptyGraph,

    /// An adjacency matrix row has the wrong length.
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// An edge weight is NaN or infinite.
    #[error("edge {from} -> {to} has a non-finite weight")]
    NonFiniteWeight { from: usize, to: usize },

    /// A node index does not exist in the graph.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    /// No directed path connects the pair (source, destination).
    #[error("destination {1} is unreachable from node {0}")]
    Unreachable(usize, usize),

    /// The genetic runner was asked for an empty population.
    #[error("population size must be at least 1")]
    EmptyPopulation,

    /// Any other invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PathError>;
