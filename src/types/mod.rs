//! All data types for the relation-graph library.

pub mod edge;
pub mod error;

use std::fmt::{Debug, Display};
use std::hash::Hash;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Vertex label type used by the file loaders and the CLI.
pub type VertexId = u64;

/// Largest graph (in vertices) the recursive traversals will accept.
pub const MAX_RECURSION_DEPTH: usize = 4_096;

/// A vertex label: a cheap, totally ordered, hashable value.
///
/// "Ascending order" everywhere in this crate is the label's `Ord`.
pub trait Vertex: Copy + Ord + Hash + Debug + Display {}

impl<T: Copy + Ord + Hash + Debug + Display> Vertex for T {}
