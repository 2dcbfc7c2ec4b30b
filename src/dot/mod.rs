//! DOT emission - converts the diagram model into Graphviz DOT source.
//!
//! Pure string building, no Graphviz bindings. Layout and rasterization
//! are delegated to the external `dot` process (see [`crate::backend`]).

mod style;
mod writer;

pub use style::{EdgeDefaults, NodeDefaults, FONT_FAMILY, ROUNDED_FILLED};
pub use writer::write_dot;
