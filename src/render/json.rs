use crate::Result;
use crate::inventory::{NodesDocument, NormalizedNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Single line, no whitespace between tokens.
    Compact,
    /// Two-space indentation.
    Pretty,
}

impl OutputStyle {
    pub fn from_pretty_flag(pretty: bool) -> Self {
        if pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Compact
        }
    }
}

/// Render normalized nodes as `{"nodes": [...]}`.
pub fn render_nodes_json(nodes: &[NormalizedNode], style: OutputStyle) -> Result<String> {
    let doc = NodesDocument { nodes };
    let json = match style {
        OutputStyle::Compact => serde_json::to_string(&doc)?,
        OutputStyle::Pretty => serde_json::to_string_pretty(&doc)?,
    };
    Ok(json)
}
