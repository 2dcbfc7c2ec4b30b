//! katsuyou - Render the Japanese verb conjugation map to SVG and PNG
//!
//! This library builds a directed graph of conjugation relationships
//! (the 活用形 bases and the forms derived from them, illustrated with
//! 行く and 食べる), serializes it to Graphviz DOT source, and renders it
//! through the external `dot` process.
//!
//! # Example
//!
//! ```rust
//! use katsuyou::{Diagram, GraphEdge, GraphNode, RankDir};
//!
//! let mut graph = Diagram::new("demo", RankDir::LR);
//! graph.add_node(GraphNode::new("A", "Start")).unwrap();
//! graph.add_node(GraphNode::new("B", "End")).unwrap();
//! graph.add_edge(GraphEdge::new("A", "B"));
//!
//! let source = katsuyou::write_dot(&graph).unwrap();
//! assert!(source.contains("digraph"));
//! ```
//!
//! Rendering the bundled map to files (requires Graphviz on `PATH`):
//!
//! ```rust,no_run
//! let written = katsuyou::render_conjugation(std::path::Path::new("docs/diagrams")).unwrap();
//! assert_eq!(written.len(), 2);
//! ```

pub mod backend;
pub mod content;
pub mod dot;
pub mod error;
pub mod types;

pub use backend::{render, Format};
pub use content::{conjugation_map, parse_table};
pub use dot::write_dot;
pub use error::{DiagramError, Result};
pub use types::*;

use std::path::{Path, PathBuf};

/// Build the bundled conjugation map and render it as
/// `<out_dir>/conjugation.svg` and `<out_dir>/conjugation.png`.
pub fn render_conjugation(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let graph = content::conjugation_map()?;
    backend::render(&graph, &out_dir.join("conjugation"), &[Format::Svg, Format::Png])
}
