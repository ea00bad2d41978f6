//! Equivalence classes and root derivation.

use std::collections::BTreeSet;

use crate::graph::RelationGraph;
use crate::types::{GraphError, GraphResult, Vertex};

impl<V: Vertex> RelationGraph<V> {
    /// The equivalence class of `vertex`: its direct successors, ascending.
    ///
    /// Empty when the graph is not an equivalence relation. Fails for a vertex
    /// outside the graph.
    pub fn equivalence_class(&self, vertex: V) -> GraphResult<Vec<V>> {
        if !self.contains_vertex(vertex) {
            return Err(GraphError::unknown_vertex(vertex));
        }
        if !self.is_equivalence() {
            return Ok(Vec::new());
        }
        Ok(self.successors(vertex)?.to_vec())
    }

    /// Every distinct equivalence class once, ordered by minimal element.
    ///
    /// Empty when the graph is not an equivalence relation.
    pub fn equivalence_classes(&self) -> Vec<Vec<V>> {
        if !self.is_equivalence() {
            return Vec::new();
        }
        let mut covered: BTreeSet<V> = BTreeSet::new();
        let mut classes = Vec::new();
        for (vertex, successors) in self.adjacency().iter() {
            if covered.contains(&vertex) {
                continue;
            }
            covered.extend(successors.iter().copied());
            classes.push(successors.to_vec());
        }
        classes
    }

    /// Root vertices, ascending and duplicate-free.
    ///
    /// A root is a vertex without predecessor or, when the graph is an
    /// equivalence relation, the minimal element of an equivalence class that
    /// does not cover every vertex. A graph forming one single class therefore
    /// has no roots.
    pub fn roots(&self) -> Vec<V> {
        let mut roots: BTreeSet<V> = self
            .adjacency()
            .in_degrees()
            .into_iter()
            .filter(|&(_, degree)| degree == 0)
            .map(|(v, _)| v)
            .collect();

        if self.is_equivalence() {
            let adjacency = self.adjacency();
            for (vertex, class) in adjacency.iter() {
                // Reflexivity puts `vertex` in its own class, so `class` is non-empty.
                let Some(&representative) = class.first() else {
                    continue;
                };
                if self
                    .vertices()
                    .any(|other| class.binary_search(&other).is_err())
                {
                    roots.insert(representative);
                } else {
                    log::debug!("vertex {} is related to every vertex", vertex);
                }
            }
        }

        roots.into_iter().collect()
    }
}
