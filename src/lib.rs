//! relation-graph — relation analysis and deterministic traversal of finite
//! directed graphs.
//!
//! A [`RelationGraph`] is built once from a vertex set and an edge set and is
//! immutable afterwards. It answers relation-property questions (reflexive,
//! symmetric, transitive, antisymmetric, equivalence), extracts equivalence
//! classes and root vertices, and runs breadth-first and depth-first searches
//! seeded from every root in ascending order.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{RelationProperty, RelationReport};
pub use format::{property_sentence, render_list, GraphDocument, GraphReader, GraphWriter};
pub use graph::{AdjacencyMap, GraphBuilder, RelationGraph, TraversalOrder, TraversalStyle};
pub use types::{Edge, GraphError, GraphResult, Vertex, VertexId, MAX_RECURSION_DEPTH};
