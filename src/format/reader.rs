//! Reads graph files (plain-text edge lists or JSON) into a RelationGraph.
//!
//! Text format: blank lines and `#` comments are ignored, the first remaining
//! line lists the vertices, and every later line holds one `source destination`
//! edge. Vertices and edge endpoints may be separated by whitespace or commas.

use std::io::Read;
use std::path::Path;

use crate::graph::RelationGraph;
use crate::types::{Edge, GraphError, GraphResult, VertexId};

use super::GraphDocument;

/// Reader for graph files.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file; `.json` files are parsed as JSON, anything else as text.
    pub fn read_from_file(path: &Path) -> GraphResult<RelationGraph<VertexId>> {
        let data = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        log::debug!("reading {} as {}", path.display(), if is_json { "json" } else { "text" });
        if is_json {
            Self::parse_json(&data)
        } else {
            Self::parse_text(&data)
        }
    }

    /// Read a text edge list from any reader.
    pub fn read_text(reader: &mut impl Read) -> GraphResult<RelationGraph<VertexId>> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::parse_text(&data)
    }

    /// Parse a text edge list.
    pub fn parse_text(data: &str) -> GraphResult<RelationGraph<VertexId>> {
        let mut vertices: Option<Vec<VertexId>> = None;
        let mut edges: Vec<Edge<VertexId>> = Vec::new();

        for (idx, raw) in data.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let labels = parse_labels(line, line_no)?;

            if vertices.is_none() {
                vertices = Some(labels);
                continue;
            }
            match labels.as_slice() {
                [source, destination] => edges.push(Edge::new(*source, *destination)),
                _ => {
                    return Err(GraphError::Parse {
                        line: line_no,
                        message: format!("expected 2 vertices per edge, found {}", labels.len()),
                    })
                }
            }
        }

        RelationGraph::from_parts(vertices.unwrap_or_default(), edges)
    }

    /// Parse a JSON graph document.
    pub fn parse_json(data: &str) -> GraphResult<RelationGraph<VertexId>> {
        let document: GraphDocument = serde_json::from_str(data)?;
        document.into_graph()
    }
}

fn parse_labels(line: &str, line_no: usize) -> GraphResult<Vec<VertexId>> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<VertexId>().map_err(|e| GraphError::Parse {
                line: line_no,
                message: format!("invalid vertex '{}': {}", t, e),
            })
        })
        .collect()
}
