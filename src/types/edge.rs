//! The directed edge struct.

use serde::{Deserialize, Serialize};

use super::Vertex;

/// A directed edge `source -> destination`. Self-loops are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge<V> {
    /// Origin of the edge.
    pub source: V,
    /// Target of the edge.
    pub destination: V,
}

impl<V: Vertex> Edge<V> {
    /// Create a new edge.
    pub fn new(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// True if the edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.destination, self.source)
    }
}

impl<V: Vertex> From<(V, V)> for Edge<V> {
    fn from((source, destination): (V, V)) -> Self {
        Self::new(source, destination)
    }
}

impl<V: Vertex> std::fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
