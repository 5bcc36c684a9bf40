use crate::inventory::Role;
use serde::Serialize;

/// A validated node record, ready for output.
///
/// Field order here is the field order in the emitted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedNode {
    pub name: String,
    pub role: Role,
    pub ip: String,
    pub cpu: i64,
    pub memory_mb: i64,

    /// Only set for roles that carry a pool; omitted from output otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
}

/// Output envelope: `{"nodes": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct NodesDocument<'a> {
    pub nodes: &'a [NormalizedNode],
}
