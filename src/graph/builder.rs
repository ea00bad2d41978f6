//! Fluent API for building RelationGraph instances.

use crate::types::{Edge, GraphResult, Vertex};

use super::RelationGraph;

/// Fluent builder for constructing a RelationGraph.
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a single vertex.
    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Add several vertices.
    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = V>) -> &mut Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add a directed edge.
    pub fn link(&mut self, source: V, destination: V) -> &mut Self {
        self.edges.push(Edge::new(source, destination));
        self
    }

    /// Add the edge in both directions.
    pub fn link_mutual(&mut self, a: V, b: V) -> &mut Self {
        self.link(a, b).link(b, a)
    }

    /// Add a self-loop on every vertex added so far.
    pub fn self_loops(&mut self) -> &mut Self {
        let loops: Vec<Edge<V>> = self.vertices.iter().map(|&v| Edge::new(v, v)).collect();
        self.edges.extend(loops);
        self
    }

    /// Relate every pair of `members` (self-loops included), forming one
    /// equivalence class.
    pub fn class(&mut self, members: &[V]) -> &mut Self {
        self.vertices.extend_from_slice(members);
        for &a in members {
            for &b in members {
                self.edges.push(Edge::new(a, b));
            }
        }
        self
    }

    /// Build the final RelationGraph.
    pub fn build(&self) -> GraphResult<RelationGraph<V>> {
        RelationGraph::from_parts(self.vertices.iter().copied(), self.edges.iter().copied())
    }
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
