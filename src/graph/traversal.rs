//! Graph traversal algorithms (BFS and DFS, iterative and recursive).
//!
//! All four variants share one visitation rule: roots are taken in ascending
//! order, a vertex is visited the first time it reaches the active end of the
//! frontier, and its successors are queued so that they come off the frontier
//! in ascending order. Later copies of an already visited vertex are discarded.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, Vertex, MAX_RECURSION_DEPTH};

use super::RelationGraph;

/// Which frontier discipline to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// FIFO frontier.
    BreadthFirst,
    /// LIFO frontier.
    DepthFirst,
}

/// Control-flow style. Both styles produce identical sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalStyle {
    /// A `while` loop over the frontier.
    Iterative,
    /// One recursive call per visited vertex.
    Recursive,
}

impl TraversalOrder {
    /// Short lowercase name ("bfs" / "dfs").
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse from "bfs"/"dfs" (or the long forms).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth_first" => Some(Self::BreadthFirst),
            "dfs" | "depth" | "depth_first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

/// Pending-work structure of a traversal.
trait Frontier<V> {
    /// Add a single vertex.
    fn push(&mut self, vertex: V);
    /// Add ascending `successors` so they are taken in ascending order.
    fn push_successors(&mut self, successors: &[V]);
    /// Look at the element at the active end.
    fn peek(&self) -> Option<&V>;
    /// Remove the element at the active end.
    fn take(&mut self) -> Option<V>;
}

struct Queue<V>(VecDeque<V>);

impl<V: Copy> Frontier<V> for Queue<V> {
    fn push(&mut self, vertex: V) {
        self.0.push_back(vertex);
    }

    fn push_successors(&mut self, successors: &[V]) {
        self.0.extend(successors.iter().copied());
    }

    fn peek(&self) -> Option<&V> {
        self.0.front()
    }

    fn take(&mut self) -> Option<V> {
        self.0.pop_front()
    }
}

struct Stack<V>(Vec<V>);

impl<V: Copy> Frontier<V> for Stack<V> {
    fn push(&mut self, vertex: V) {
        self.0.push(vertex);
    }

    fn push_successors(&mut self, successors: &[V]) {
        // Descending pushes pop ascending.
        self.0.extend(successors.iter().rev().copied());
    }

    fn peek(&self) -> Option<&V> {
        self.0.last()
    }

    fn take(&mut self) -> Option<V> {
        self.0.pop()
    }
}

/// Visitation record: first-visit order plus a membership set.
struct Visited<V> {
    order: Vec<V>,
    seen: HashSet<V>,
}

impl<V: Vertex> Visited<V> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn contains(&self, vertex: &V) -> bool {
        self.seen.contains(vertex)
    }

    fn insert(&mut self, vertex: V) {
        if self.seen.insert(vertex) {
            self.order.push(vertex);
        }
    }
}

/// Traverse `graph` seeding from `roots` (expected ascending, deduplicated).
pub fn traverse_from<V: Vertex>(
    graph: &RelationGraph<V>,
    roots: &[V],
    order: TraversalOrder,
    style: TraversalStyle,
) -> GraphResult<Vec<V>> {
    if style == TraversalStyle::Recursive && graph.vertex_count() > MAX_RECURSION_DEPTH {
        log::warn!(
            "refusing recursive {} over {} vertices",
            order.name(),
            graph.vertex_count()
        );
        return Err(GraphError::RecursionLimit {
            vertices: graph.vertex_count(),
            limit: MAX_RECURSION_DEPTH,
        });
    }

    match order {
        TraversalOrder::BreadthFirst => run(graph, roots, style, &mut Queue(VecDeque::new())),
        TraversalOrder::DepthFirst => run(graph, roots, style, &mut Stack(Vec::new())),
    }
}

fn run<V: Vertex, F: Frontier<V>>(
    graph: &RelationGraph<V>,
    roots: &[V],
    style: TraversalStyle,
    frontier: &mut F,
) -> GraphResult<Vec<V>> {
    let mut visited = Visited::new();

    // Each root's component is exhausted before the next root is seeded.
    for &root in roots {
        if visited.contains(&root) {
            continue;
        }
        frontier.push(root);
        match style {
            TraversalStyle::Iterative => drain_iterative(graph, frontier, &mut visited)?,
            TraversalStyle::Recursive => drain_recursive(graph, frontier, &mut visited)?,
        }
    }

    Ok(visited.order)
}

/// Drop already visited vertices from the active end.
fn discard_visited<V: Vertex, F: Frontier<V>>(frontier: &mut F, visited: &Visited<V>) {
    while frontier.peek().is_some_and(|v| visited.contains(v)) {
        frontier.take();
    }
}

/// Visit the vertex at the active end and queue its successors.
fn visit_next<V: Vertex, F: Frontier<V>>(
    graph: &RelationGraph<V>,
    frontier: &mut F,
    visited: &mut Visited<V>,
) -> GraphResult<bool> {
    discard_visited(frontier, visited);
    let Some(vertex) = frontier.take() else {
        return Ok(false);
    };
    log::trace!("visit {}", vertex);
    visited.insert(vertex);
    frontier.push_successors(graph.successors(vertex)?);
    Ok(true)
}

fn drain_iterative<V: Vertex, F: Frontier<V>>(
    graph: &RelationGraph<V>,
    frontier: &mut F,
    visited: &mut Visited<V>,
) -> GraphResult<()> {
    while visit_next(graph, frontier, visited)? {}
    Ok(())
}

fn drain_recursive<V: Vertex, F: Frontier<V>>(
    graph: &RelationGraph<V>,
    frontier: &mut F,
    visited: &mut Visited<V>,
) -> GraphResult<()> {
    if !visit_next(graph, frontier, visited)? {
        return Ok(());
    }
    drain_recursive(graph, frontier, visited)
}
