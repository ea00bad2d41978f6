//! Serializable graph document used by the JSON format.

use serde::{Deserialize, Serialize};

use crate::graph::RelationGraph;
use crate::types::{Edge, GraphResult, VertexId};

/// On-disk JSON shape of a graph: `{"vertices": [...], "edges": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertices: Vec<VertexId>,
    #[serde(default)]
    pub edges: Vec<Edge<VertexId>>,
}

impl GraphDocument {
    /// Snapshot a graph; vertices ascending, edges in insertion order.
    pub fn from_graph(graph: &RelationGraph<VertexId>) -> Self {
        Self {
            vertices: graph.vertices().collect(),
            edges: graph.edges().to_vec(),
        }
    }

    /// Build the graph this document describes.
    pub fn into_graph(self) -> GraphResult<RelationGraph<VertexId>> {
        RelationGraph::from_parts(self.vertices, self.edges)
    }
}
