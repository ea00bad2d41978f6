//! Root-seeded searches over the whole graph.

use crate::graph::{traverse_from, RelationGraph, TraversalOrder, TraversalStyle};
use crate::types::{GraphResult, Vertex};

impl<V: Vertex> RelationGraph<V> {
    /// Traverse the whole graph, seeding from every root in ascending order.
    pub fn traverse(&self, order: TraversalOrder, style: TraversalStyle) -> GraphResult<Vec<V>> {
        let roots = self.roots();
        traverse_from(self, &roots, order, style)
    }

    /// Breadth-first search driven by a loop.
    pub fn iterative_bfs(&self) -> GraphResult<Vec<V>> {
        self.traverse(TraversalOrder::BreadthFirst, TraversalStyle::Iterative)
    }

    /// Depth-first search driven by a loop.
    pub fn iterative_dfs(&self) -> GraphResult<Vec<V>> {
        self.traverse(TraversalOrder::DepthFirst, TraversalStyle::Iterative)
    }

    /// Breadth-first search driven by recursion.
    pub fn recursive_bfs(&self) -> GraphResult<Vec<V>> {
        self.traverse(TraversalOrder::BreadthFirst, TraversalStyle::Recursive)
    }

    /// Depth-first search driven by recursion.
    pub fn recursive_dfs(&self) -> GraphResult<Vec<V>> {
        self.traverse(TraversalOrder::DepthFirst, TraversalStyle::Recursive)
    }
}
