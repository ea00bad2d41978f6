//! In-memory graph structures — the core of the crate.

pub mod adjacency;
pub mod builder;
pub mod relation_graph;
pub mod traversal;

pub use adjacency::AdjacencyMap;
pub use builder::GraphBuilder;
pub use relation_graph::RelationGraph;
pub use traversal::{traverse_from, TraversalOrder, TraversalStyle};
