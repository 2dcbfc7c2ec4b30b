//! Render backend - feeds DOT source to the external `dot` process.
//!
//! One invocation per requested output format. The backend contract is
//! stdin → image bytes on stdout; anything on stderr with a non-zero
//! exit is surfaced as a backend failure.

use crate::dot::write_dot;
use crate::error::{DiagramError, Result};
use crate::types::Diagram;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, error, info};

/// Output format tag: which `-T` flag to pass and which extension to write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    Png,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Png => "png",
        }
    }

    fn type_flag(&self) -> &'static str {
        match self {
            Format::Svg => "-Tsvg",
            Format::Png => "-Tpng",
        }
    }
}

/// Render a diagram to `<out_base>.<ext>` for each requested format.
///
/// The diagram is serialized (and therefore validated) once, before any
/// directory or file is touched. Formats are then attempted
/// independently: a failure on one does not prevent attempting the rest,
/// and files already produced are left in place. The first error, if
/// any, is returned after all formats have been tried.
pub fn render(graph: &Diagram, out_base: &Path, formats: &[Format]) -> Result<Vec<PathBuf>> {
    let source = write_dot(graph)?;
    debug!(bytes = source.len(), "serialized diagram to DOT");

    if let Some(parent) = out_base.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut written = Vec::new();
    let mut first_err = None;
    for format in formats {
        let path = out_base.with_extension(format.extension());
        match render_one(&source, *format, &path) {
            Ok(()) => {
                info!(path = %path.display(), "rendered");
                written.push(path);
            }
            Err(e) => {
                error!(path = %path.display(), "render failed: {e}");
                first_err.get_or_insert(e);
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(written),
    }
}

/// Run `dot` once and write its stdout to `path`.
fn render_one(source: &str, format: Format, path: &Path) -> Result<()> {
    let mut child = Command::new("dot")
        .arg(format.type_flag())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                DiagramError::RenderBackendFailure {
                    message: "Graphviz `dot` executable not found on PATH".to_string(),
                }
            } else {
                DiagramError::Io(e)
            }
        })?;

    let mut stdin = child.stdin.take().ok_or_else(|| {
        DiagramError::RenderBackendFailure {
            message: "failed to open stdin of the dot process".to_string(),
        }
    })?;
    stdin.write_all(source.as_bytes())?;
    // dot reads until EOF
    drop(stdin);

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(DiagramError::RenderBackendFailure {
            message: format!(
                "dot {} exited with {}: {}",
                format.type_flag(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }

    fs::write(path, &output.stdout)?;
    Ok(())
}
