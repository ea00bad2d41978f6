//! CLI command implementations.
//!
//! Each `render_*` function produces the full output of a subcommand for an
//! already loaded graph, one terminated line per result line. The `cmd_*`
//! wrappers load the file and print that output.

use std::fmt::Write as _;
use std::path::Path;

use crate::engine::RelationProperty;
use crate::format::{property_sentence, render_list, GraphReader, GraphWriter};
use crate::graph::{RelationGraph, TraversalOrder, TraversalStyle};
use crate::types::{GraphResult, VertexId};

fn line(out: &mut String, text: impl std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", text);
}

/// Counts, roots and every relation property of `graph`, loaded from `source`.
pub fn render_info(
    graph: &RelationGraph<VertexId>,
    source: &str,
    json: bool,
) -> GraphResult<String> {
    let report = graph.relation_report();
    let mut out = String::new();

    if json {
        let info = serde_json::json!({
            "file": source,
            "properties": report,
            "roots": graph.roots(),
        });
        line(&mut out, serde_json::to_string_pretty(&info)?);
    } else {
        line(&mut out, format_args!("File: {}", source));
        line(&mut out, format_args!("Vertices: {}", report.vertices));
        line(&mut out, format_args!("Edges: {}", report.edges));
        line(&mut out, format_args!("Roots: {}", render_list(&graph.roots())));
        for property in RelationProperty::ALL {
            line(&mut out, property_sentence(property, graph.check(property)));
        }
    }
    Ok(out)
}

pub fn render_roots(graph: &RelationGraph<VertexId>, json: bool) -> GraphResult<String> {
    let roots = graph.roots();
    let mut out = String::new();
    if json {
        line(&mut out, serde_json::json!({ "roots": roots }));
    } else {
        line(&mut out, render_list(&roots));
    }
    Ok(out)
}

pub fn render_check(
    graph: &RelationGraph<VertexId>,
    property: RelationProperty,
    json: bool,
) -> GraphResult<String> {
    let holds = graph.check(property);
    let mut out = String::new();
    if json {
        line(
            &mut out,
            serde_json::json!({ "property": property, "holds": holds }),
        );
    } else {
        line(&mut out, property_sentence(property, holds));
    }
    Ok(out)
}

pub fn render_class(
    graph: &RelationGraph<VertexId>,
    vertex: VertexId,
    json: bool,
) -> GraphResult<String> {
    let class = graph.equivalence_class(vertex)?;
    let mut out = String::new();
    if json {
        line(
            &mut out,
            serde_json::json!({ "vertex": vertex, "class": class }),
        );
    } else {
        line(&mut out, render_list(&class));
    }
    Ok(out)
}

/// One line per equivalence class, or the negative equivalence sentence.
///
/// An equivalence relation without vertices has no classes and renders
/// nothing in text mode.
pub fn render_classes(graph: &RelationGraph<VertexId>, json: bool) -> GraphResult<String> {
    let mut out = String::new();
    if json {
        let classes = graph.equivalence_classes();
        line(&mut out, serde_json::json!({ "classes": classes }));
    } else if !graph.is_equivalence() {
        line(
            &mut out,
            property_sentence(RelationProperty::Equivalence, false),
        );
    } else {
        for class in graph.equivalence_classes() {
            line(&mut out, render_list(&class));
        }
    }
    Ok(out)
}

pub fn render_search(
    graph: &RelationGraph<VertexId>,
    order: TraversalOrder,
    style: TraversalStyle,
    json: bool,
) -> GraphResult<String> {
    let visited = graph.traverse(order, style)?;
    let mut out = String::new();
    if json {
        line(
            &mut out,
            serde_json::json!({
                "order": order.name(),
                "recursive": style == TraversalStyle::Recursive,
                "visited": visited,
            }),
        );
    } else {
        line(&mut out, render_list(&visited));
    }
    Ok(out)
}

/// Display vertex/edge counts and every relation property.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    print!("{}", render_info(&graph, &path.display().to_string(), json)?);
    Ok(())
}

/// List root vertices.
pub fn cmd_roots(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    print!("{}", render_roots(&graph, json)?);
    Ok(())
}

/// Check one relation property.
pub fn cmd_check(path: &Path, property: RelationProperty, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    print!("{}", render_check(&graph, property, json)?);
    Ok(())
}

/// Compute the equivalence class of one vertex.
pub fn cmd_class(path: &Path, vertex: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    print!("{}", render_class(&graph, vertex, json)?);
    Ok(())
}

/// List every equivalence class.
pub fn cmd_classes(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    print!("{}", render_classes(&graph, json)?);
    Ok(())
}

/// Run a root-seeded search and print the visitation order.
pub fn cmd_search(
    path: &Path,
    order: TraversalOrder,
    style: TraversalStyle,
    json: bool,
) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    print!("{}", render_search(&graph, order, style, json)?);
    Ok(())
}

/// Export the graph as a JSON document on stdout.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let writer = GraphWriter::new(pretty);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writer.write_to(&graph, &mut handle)
}
