//! Core graph structure — vertex set, edge set and the ordered adjacency index.

use std::collections::{BTreeSet, HashSet};

use crate::types::{Edge, GraphResult, Vertex};

use super::AdjacencyMap;

/// A finite directed graph over totally ordered vertex labels.
///
/// Vertices and edges are fixed at construction; the graph is never mutated
/// afterwards, so every query can be repeated and shared across threads.
#[derive(Debug, Clone)]
pub struct RelationGraph<V> {
    /// All vertices, ascending.
    vertices: BTreeSet<V>,
    /// All edges in first-seen order, without duplicates.
    edges: Vec<Edge<V>>,
    /// Membership index over `edges`.
    edge_set: HashSet<Edge<V>>,
    /// Ordered successor lists.
    adjacency: AdjacencyMap<V>,
}

impl<V: Vertex> RelationGraph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
            adjacency: AdjacencyMap::default(),
        }
    }

    /// Create from a vertex collection and an edge collection.
    ///
    /// Duplicate vertices and duplicate edges are collapsed. Fails with
    /// `UnknownVertex` if an edge references a vertex outside `vertices`.
    pub fn from_parts<I, E>(vertices: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = Edge<V>>,
    {
        let vertices: BTreeSet<V> = vertices.into_iter().collect();

        let mut edge_set = HashSet::new();
        let mut unique_edges = Vec::new();
        let mut duplicates = 0usize;
        for edge in edges {
            if edge_set.insert(edge) {
                unique_edges.push(edge);
            } else {
                duplicates += 1;
            }
        }

        let adjacency = AdjacencyMap::build(&vertices, &unique_edges)?;

        log::debug!(
            "built graph: {} vertices, {} edges ({} duplicate edges dropped)",
            vertices.len(),
            unique_edges.len(),
            duplicates
        );

        Ok(Self {
            vertices,
            edges: unique_edges,
            edge_set,
            adjacency,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of (distinct) edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertices, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.iter().copied()
    }

    /// All edges (immutable slice).
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// The ordered adjacency index.
    pub fn adjacency(&self) -> &AdjacencyMap<V> {
        &self.adjacency
    }

    /// True if `vertex` belongs to the graph.
    pub fn contains_vertex(&self, vertex: V) -> bool {
        self.vertices.contains(&vertex)
    }

    /// True if the edge `source -> destination` exists.
    pub fn has_edge(&self, source: V, destination: V) -> bool {
        self.edge_set.contains(&Edge::new(source, destination))
    }

    /// Direct successors of `vertex`, ascending.
    pub fn successors(&self, vertex: V) -> GraphResult<&[V]> {
        self.adjacency.successors(vertex)
    }
}

impl<V: Vertex> Default for RelationGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
