//! Error types for the relation-graph library.

use thiserror::Error;

/// All errors that can occur in the relation-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex was referenced that is not part of the graph's vertex set.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// A recursive traversal was requested on a graph too large to recurse over.
    #[error("Graph has {vertices} vertices, recursive traversal is limited to {limit}")]
    RecursionLimit { vertices: usize, limit: usize },

    /// Malformed line in a text edge-list file.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Malformed JSON graph document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Build an `UnknownVertex` error from any displayable label.
    pub fn unknown_vertex(vertex: impl std::fmt::Display) -> Self {
        Self::UnknownVertex(vertex.to_string())
    }
}

/// Convenience result type for relation-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
