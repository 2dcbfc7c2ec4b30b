//! Default attribute constants for the emitted DOT source.
//!
//! These match what the layout engine receives as graph-wide defaults;
//! per-node fills are carried on the nodes themselves.

/// Default node attributes (shape, border, font)
pub struct NodeDefaults;

impl NodeDefaults {
    pub const SHAPE: &'static str = "box";
    pub const BORDER: &'static str = "lightgrey";
    pub const FONT_SIZE: u32 = 12;
}

/// Default edge attributes (font)
pub struct EdgeDefaults;

impl EdgeDefaults {
    pub const FONT_SIZE: u32 = 11;
}

/// Font for node and edge labels. Must cover the kana/kanji range.
pub const FONT_FAMILY: &str = "Noto Sans JP";

/// Node style applied uniformly, with or without an explicit fill color
pub const ROUNDED_FILLED: &str = "rounded,filled";
