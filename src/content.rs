//! The conjugation map content, kept as a declarative table.
//!
//! Nodes and edges live in `data/conjugation.json` rather than as literal
//! build calls, so the content can be reviewed, extended or translated
//! without touching the rendering code. The table is embedded at compile
//! time and parsed once at startup.

use crate::error::Result;
use crate::types::{Diagram, EdgeLine, GraphEdge, GraphNode, RankDir};
use serde::Deserialize;

const CONJUGATION_TABLE: &str = include_str!("../data/conjugation.json");

#[derive(Debug, Deserialize)]
struct MapTable {
    name: String,
    #[serde(default)]
    comment: Option<String>,
    rankdir: RankDir,
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    key: String,
    label: String,
    #[serde(default)]
    fill: Option<String>,
    #[serde(default)]
    tooltip: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    #[serde(default)]
    tooltip: Option<String>,
    #[serde(default)]
    line: EdgeLine,
}

/// Build a [`Diagram`] from a JSON table.
///
/// Records keep their table order, and node keys are checked for
/// uniqueness on the way in, so a malformed table fails loudly here.
pub fn parse_table(json: &str) -> Result<Diagram> {
    let table: MapTable = serde_json::from_str(json)?;

    let mut graph = Diagram::new(table.name, table.rankdir);
    graph.comment = table.comment;

    for record in table.nodes {
        graph.add_node(GraphNode {
            key: record.key,
            label: record.label,
            fill: record.fill,
            tooltip: record.tooltip,
        })?;
    }
    for record in table.edges {
        graph.add_edge(GraphEdge {
            source: record.source,
            target: record.target,
            tooltip: record.tooltip,
            line: record.line,
        });
    }

    Ok(graph)
}

/// The bundled conjugation map: the six 活用形 bases and the forms
/// derived from them, illustrated with 行く and 食べる.
pub fn conjugation_map() -> Result<Diagram> {
    parse_table(CONJUGATION_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_map_loads() {
        let graph = conjugation_map().unwrap();
        assert_eq!(graph.name, "conjugation");
        assert_eq!(graph.rankdir, RankDir::LR);
        assert_eq!(graph.nodes.len(), 21);
        assert_eq!(graph.edges.len(), 16);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_bundled_map_bases() {
        let graph = conjugation_map().unwrap();
        for key in ["Mizen", "Renyou", "Shuushi", "Rentaikei", "Katei", "Meirei"] {
            let node = graph.nodes.get(key).unwrap_or_else(|| panic!("missing base {key}"));
            assert_eq!(node.fill.as_deref(), Some("#DDDDDD"));
            assert!(node.tooltip.is_some());
        }
        assert!(graph.nodes["Mizen"].label.contains("未然形"));
    }

    #[test]
    fn test_colloquial_potential_is_dashed() {
        let graph = conjugation_map().unwrap();
        let edge = graph
            .edges
            .iter()
            .find(|e| e.source == "Pot" && e.target == "PotCasual")
            .unwrap();
        assert_eq!(edge.line, EdgeLine::Dashed);
        // Every other derivation edge is solid
        assert!(graph
            .edges
            .iter()
            .filter(|e| e.target != "PotCasual")
            .all(|e| e.line == EdgeLine::Solid));
    }

    #[test]
    fn test_obligation_chain() {
        let graph = conjugation_map().unwrap();
        assert!(graph.edges.iter().any(|e| e.source == "Mizen" && e.target == "Neg"));
        assert!(graph.edges.iter().any(|e| e.source == "Neg" && e.target == "Nakereba"));
        assert!(graph.nodes["Nakereba"].label.contains("なければならない"));
    }

    #[test]
    fn test_table_order_is_declaration_order() {
        let graph = conjugation_map().unwrap();
        assert_eq!(graph.node_order.first().map(String::as_str), Some("Mizen"));
        assert_eq!(graph.node_order.last().map(String::as_str), Some("PotCasual"));
    }

    #[test]
    fn test_duplicate_key_in_table_fails() {
        let json = r#"{
            "name": "bad",
            "rankdir": "LR",
            "nodes": [
                {"key": "A", "label": "one"},
                {"key": "A", "label": "two"}
            ],
            "edges": []
        }"#;
        let err = parse_table(json).unwrap_err();
        assert!(matches!(
            err,
            crate::error::DiagramError::DuplicateKey { ref key } if key == "A"
        ));
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(parse_table("not json").is_err());
    }
}
