//! Type definitions for the conjugation graph model

use crate::error::{DiagramError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Layout direction of the rendered graph (Graphviz `rankdir`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RankDir {
    LR, // Left-Right
    TB, // Top-Bottom
    BT, // Bottom-Top
    RL, // Right-Left
}

impl RankDir {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LR" => Some(RankDir::LR),
            "TB" => Some(RankDir::TB),
            "BT" => Some(RankDir::BT),
            "RL" => Some(RankDir::RL),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RankDir::LR => "LR",
            RankDir::TB => "TB",
            RankDir::BT => "BT",
            RankDir::RL => "RL",
        }
    }
}

/// Line style of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeLine {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl EdgeLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeLine::Solid => "solid",
            EdgeLine::Dashed => "dashed",
            EdgeLine::Dotted => "dotted",
        }
    }
}

/// A node in the conjugation graph: one verb form
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub key: String,
    /// Display text; `\n` breaks the label over multiple lines
    pub label: String,
    /// Hex fill color. `None` keeps the renderer's default surface.
    pub fill: Option<String>,
    pub tooltip: Option<String>,
}

impl GraphNode {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            fill: None,
            tooltip: None,
        }
    }
}

/// A directed edge: a derivation relationship between two forms
#[derive(Debug, Clone)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub tooltip: Option<String>,
    pub line: EdgeLine,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            tooltip: None,
            line: EdgeLine::Solid,
        }
    }
}

/// The complete diagram: ordered nodes and edges plus graph-level attributes
#[derive(Debug, Clone)]
pub struct Diagram {
    /// Graph identifier, emitted as the `digraph` name
    pub name: String,
    /// Free-text comment emitted at the top of the DOT source
    pub comment: Option<String>,
    pub rankdir: RankDir,
    pub nodes: HashMap<String, GraphNode>,
    pub node_order: Vec<String>, // Track insertion order
    pub edges: Vec<GraphEdge>,
}

impl Diagram {
    pub fn new(name: impl Into<String>, rankdir: RankDir) -> Self {
        Self {
            name: name.into(),
            comment: None,
            rankdir,
            nodes: HashMap::new(),
            node_order: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a node. Keys must be unique within the diagram.
    pub fn add_node(&mut self, node: GraphNode) -> Result<()> {
        if self.nodes.contains_key(&node.key) {
            return Err(DiagramError::DuplicateKey { key: node.key });
        }
        self.node_order.push(node.key.clone());
        self.nodes.insert(node.key.clone(), node);
        Ok(())
    }

    /// Append an edge. Endpoints may be declared later; they are only
    /// checked against the node collection by [`validate`](Self::validate).
    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }

    /// Check that every edge endpoint names a declared node.
    pub fn validate(&self) -> Result<()> {
        for edge in &self.edges {
            for key in [&edge.source, &edge.target] {
                if !self.nodes.contains_key(key) {
                    return Err(DiagramError::UnknownNodeReference { key: key.clone() });
                }
            }
        }
        Ok(())
    }
}
