//! Error types for diagram construction and rendering.

use thiserror::Error;

/// Result type alias for diagram operations.
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Errors that can occur while building or rendering the diagram.
///
/// All of these are fatal at this crate's scope; nothing is retried.
#[derive(Error, Debug)]
pub enum DiagramError {
    /// A node was added with a key that is already present.
    #[error("Duplicate node key: {key}")]
    DuplicateKey {
        /// The key that was declared twice.
        key: String,
    },

    /// An edge endpoint does not name a declared node.
    #[error("Edge references unknown node: {key}")]
    UnknownNodeReference {
        /// The undeclared endpoint key.
        key: String,
    },

    /// The external `dot` renderer could not be run or rejected the graph.
    #[error("Render backend failure: {message}")]
    RenderBackendFailure {
        /// What the backend reported (stderr, or the spawn error).
        message: String,
    },

    /// IO error creating the output directory or writing an output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The content table is not valid JSON or does not match the schema.
    #[error("Content table error: {0}")]
    Json(#[from] serde_json::Error),
}
