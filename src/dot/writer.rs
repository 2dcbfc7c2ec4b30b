//! DOT writer - serializes a [`Diagram`] into Graphviz DOT source.
//!
//! Statements are emitted in insertion order: graph attributes, then
//! nodes, then edges. The output is deterministic for a fixed diagram.

use super::style::{EdgeDefaults, NodeDefaults, FONT_FAMILY, ROUNDED_FILLED};
use crate::error::Result;
use crate::types::{Diagram, EdgeLine, GraphEdge, GraphNode};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // DOT identifiers that may appear unquoted
    static ref RE_BARE_ID: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Reserved words that must be quoted even when they look like bare IDs
const DOT_KEYWORDS: [&str; 6] = ["digraph", "edge", "graph", "node", "strict", "subgraph"];

/// Serialize a diagram as DOT source.
///
/// Validates edge endpoints first, so an edge naming an undeclared node
/// fails here - before any backend is invoked or file is written.
pub fn write_dot(graph: &Diagram) -> Result<String> {
    graph.validate()?;

    let mut parts: Vec<String> = Vec::new();

    if let Some(comment) = &graph.comment {
        parts.push(format!("// {}", comment));
    }
    parts.push(format!("digraph {} {{", quote_id(&graph.name)));
    parts.push(format!("  rankdir={};", graph.rankdir.as_str()));
    parts.push(format!(
        "  node [shape={}, color={}, fontname={}, fontsize={}];",
        NodeDefaults::SHAPE,
        NodeDefaults::BORDER,
        quote(FONT_FAMILY),
        NodeDefaults::FONT_SIZE
    ));
    parts.push(format!(
        "  edge [fontname={}, fontsize={}];",
        quote(FONT_FAMILY),
        EdgeDefaults::FONT_SIZE
    ));

    for key in &graph.node_order {
        parts.push(render_node(&graph.nodes[key]));
    }
    for edge in &graph.edges {
        parts.push(render_edge(edge));
    }

    parts.push("}".to_string());

    Ok(parts.join("\n"))
}

fn render_node(node: &GraphNode) -> String {
    let mut attrs = vec![
        format!("label={}", quote(&node.label)),
        format!("style={}", quote(ROUNDED_FILLED)),
    ];
    if let Some(fill) = &node.fill {
        attrs.push(format!("fillcolor={}", quote(fill)));
    }
    if let Some(tooltip) = &node.tooltip {
        attrs.push(format!("tooltip={}", quote(tooltip)));
    }
    format!("  {} [{}];", quote_id(&node.key), attrs.join(", "))
}

fn render_edge(edge: &GraphEdge) -> String {
    let mut attrs: Vec<String> = Vec::new();
    if edge.line != EdgeLine::Solid {
        attrs.push(format!("style={}", edge.line.as_str()));
    }
    if let Some(tooltip) = &edge.tooltip {
        attrs.push(format!("tooltip={}", quote(tooltip)));
    }

    let head = format!("  {} -> {}", quote_id(&edge.source), quote_id(&edge.target));
    if attrs.is_empty() {
        format!("{};", head)
    } else {
        format!("{} [{}];", head, attrs.join(", "))
    }
}

// ============================================================================
// Quoting
// ============================================================================

/// Emit an identifier bare when DOT allows it, quoted otherwise
fn quote_id(id: &str) -> String {
    if RE_BARE_ID.is_match(id) && !DOT_KEYWORDS.contains(&id.to_lowercase().as_str()) {
        id.to_string()
    } else {
        quote(id)
    }
}

/// Quote and escape a DOT string. Newlines become the `\n` label
/// line-break escape.
fn quote(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}
