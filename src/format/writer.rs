//! Presentation helpers: list rendering, property sentences and JSON export.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::engine::RelationProperty;
use crate::graph::RelationGraph;
use crate::types::{GraphResult, VertexId};

use super::GraphDocument;

/// Render a sequence as `[a, b, c]`.
pub fn render_list<T: Display>(items: &[T]) -> String {
    let body: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", body.join(", "))
}

/// The sentence reporting whether `property` holds, e.g.
/// "The graph is NOT reflexive".
pub fn property_sentence(property: RelationProperty, holds: bool) -> String {
    let negation = if holds { "" } else { "NOT " };
    match property {
        RelationProperty::Equivalence => {
            format!("The graph is {}an equivalence relation", negation)
        }
        other => format!("The graph is {}{}", negation, other.name()),
    }
}

/// Writer for JSON graph documents.
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a new writer.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize a graph to a JSON string.
    pub fn to_json(&self, graph: &RelationGraph<VertexId>) -> GraphResult<String> {
        let document = GraphDocument::from_graph(graph);
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    /// Write a graph as JSON to any writer.
    pub fn write_to(&self, graph: &RelationGraph<VertexId>, writer: &mut impl Write) -> GraphResult<()> {
        let json = self.to_json(graph)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write a graph as JSON to a file.
    pub fn write_to_file(&self, graph: &RelationGraph<VertexId>, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
