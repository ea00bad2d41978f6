//! Ordered adjacency index — maps each vertex to its sorted direct successors.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::types::{Edge, GraphError, GraphResult, Vertex};

/// Maps each vertex to its direct successors in ascending order.
///
/// Every vertex of the graph has an entry, empty when it has no outgoing edge.
/// Successor lists never contain duplicates.
#[derive(Debug, Clone)]
pub struct AdjacencyMap<V> {
    index: BTreeMap<V, Vec<V>>,
}

impl<V: Vertex> AdjacencyMap<V> {
    /// Build the index. Fails if an edge references a vertex outside `vertices`.
    pub fn build(vertices: &BTreeSet<V>, edges: &[Edge<V>]) -> GraphResult<Self> {
        let mut index: BTreeMap<V, Vec<V>> =
            vertices.iter().map(|&v| (v, Vec::new())).collect();

        for edge in edges {
            if !index.contains_key(&edge.destination) {
                return Err(GraphError::unknown_vertex(edge.destination));
            }
            let successors = index
                .get_mut(&edge.source)
                .ok_or_else(|| GraphError::unknown_vertex(edge.source))?;
            insert_sorted(successors, edge.destination);
        }

        Ok(Self { index })
    }

    /// Direct successors of `vertex`, ascending.
    pub fn successors(&self, vertex: V) -> GraphResult<&[V]> {
        self.index
            .get(&vertex)
            .map(|v| v.as_slice())
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }

    /// True if `vertex` has an entry.
    pub fn contains(&self, vertex: V) -> bool {
        self.index.contains_key(&vertex)
    }

    /// Number of vertices indexed.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if no vertex is indexed.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate `(vertex, successors)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (V, &[V])> + '_ {
        self.index.iter().map(|(&v, succ)| (v, succ.as_slice()))
    }

    /// Number of incoming edges per vertex (zero entries included).
    pub fn in_degrees(&self) -> HashMap<V, usize> {
        let mut degrees: HashMap<V, usize> = self.index.keys().map(|&v| (v, 0)).collect();
        for successors in self.index.values() {
            for target in successors {
                if let Some(d) = degrees.get_mut(target) {
                    *d += 1;
                }
            }
        }
        degrees
    }
}

impl<V: Vertex> Default for AdjacencyMap<V> {
    fn default() -> Self {
        Self {
            index: BTreeMap::new(),
        }
    }
}

/// Insert keeping `list` ascending and duplicate-free.
fn insert_sorted<V: Ord + Copy>(list: &mut Vec<V>, value: V) {
    match list.last() {
        None => list.push(value),
        Some(tail) if value > *tail => list.push(value),
        Some(_) => {
            let pos = list.partition_point(|existing| *existing < value);
            if list.get(pos) != Some(&value) {
                list.insert(pos, value);
            }
        }
    }
}
