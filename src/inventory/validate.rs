//! Inventory validation.
//!
//! Accepted document shapes:
//! {
//!   "nodes": [
//!     {
//!       "name": "cp-1",            // required, unique, trimmed
//!       "role": "control-plane",   // control-plane | worker | etcd | api-lb
//!       "ip": "10.0.0.1",          // required, trimmed, not otherwise checked
//!       "cpu": 4,                  // integer-coercible, > 0
//!       "memory_mb": 8192,         // integer-coercible, > 0
//!       "pool": "general"          // workers only
//!     },
//!     ...
//!   ]
//! }
//! or the bare `[...]` list on its own.
//!
//! Entries are checked in order and the first broken rule aborts the run.
//! Cluster-wide quorum (control-plane and etcd counts) is checked only after
//! every entry has passed.

use crate::error::InventoryError;
use crate::inventory::coerce::{coerce_int, pool_label, scalar_text};
use crate::inventory::role::UnknownRole;
use crate::inventory::{NormalizedNode, PoolRule, Role};
use serde_json::{Map, Value};
use std::collections::HashSet;

pub const MIN_CONTROL_PLANE_NODES: usize = 1;
pub const MIN_ETCD_NODES: usize = 3;

pub type Result<T> = std::result::Result<T, InventoryError>;

/// Validate a decoded inventory document and return its normalized nodes in
/// input order.
pub fn validate_inventory(document: &Value) -> Result<Vec<NormalizedNode>> {
    let entries = node_entries(document)?;

    let mut seen_names: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut counts = RoleCounts::default();
    let mut nodes = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        let node = validate_entry(idx + 1, entry, &mut seen_names)?;
        tracing::debug!(name = %node.name, role = %node.role, "accepted node");
        counts.record(node.role);
        nodes.push(node);
    }

    counts.check_quorum()?;

    tracing::info!(
        nodes = nodes.len(),
        control_plane = counts.control_plane,
        etcd = counts.etcd,
        worker = counts.worker,
        api_lb = counts.api_lb,
        "inventory validated"
    );

    Ok(nodes)
}

/// Resolve the node list: either the `nodes` field of a mapping or the
/// document itself.
fn node_entries(document: &Value) -> Result<&[Value]> {
    let nodes = match document {
        Value::Object(map) => map.get("nodes"),
        other => Some(other),
    };

    match nodes {
        Some(Value::Array(entries)) => Ok(entries),
        _ => Err(InventoryError::shape(
            "inventory must be a list or an object with a top-level 'nodes' list",
        )),
    }
}

/// Check one entry. `pos` is 1-based and only used in messages.
fn validate_entry(
    pos: usize,
    entry: &Value,
    seen_names: &mut HashSet<String>,
) -> Result<NormalizedNode> {
    let Value::Object(fields) = entry else {
        return Err(InventoryError::shape(format!("nodes[{pos}] must be an object")));
    };

    let name = text_field(pos, fields, "name")?;
    if name.is_empty() {
        return Err(InventoryError::validation(format!("nodes[{pos}].name is required")));
    }
    if !seen_names.insert(name.clone()) {
        return Err(InventoryError::validation(format!("duplicate node name: {name}")));
    }

    let role_text = text_field(pos, fields, "role")?;
    let role: Role = role_text.parse().map_err(|UnknownRole(role)| {
        InventoryError::validation(format!("nodes[{pos}].role '{role}' is invalid"))
    })?;

    let ip = text_field(pos, fields, "ip")?;
    if ip.is_empty() {
        return Err(InventoryError::validation(format!("nodes[{pos}].ip is required")));
    }

    let integer_field = |field: &'static str| {
        coerce_int(field, fields.get(field)).map_err(|e| {
            InventoryError::coercion(format!("nodes[{pos}] cpu and memory_mb must be integers"), e)
        })
    };
    let cpu = integer_field("cpu")?;
    let memory_mb = integer_field("memory_mb")?;
    if cpu <= 0 || memory_mb <= 0 {
        return Err(InventoryError::validation(format!(
            "nodes[{pos}] cpu and memory_mb must be > 0"
        )));
    }

    let pool = match role.pool_rule() {
        PoolRule::Required => Some(pool_label(fields.get("pool")).ok_or_else(|| {
            InventoryError::validation(format!("nodes[{pos}] {role} nodes require non-empty pool"))
        })?),
        PoolRule::Ignored => {
            if fields.get("pool").is_some_and(|v| !v.is_null()) {
                tracing::debug!(name = %name, role = %role, "dropping pool on non-pooled role");
            }
            None
        }
    };

    Ok(NormalizedNode {
        name,
        role,
        ip,
        cpu,
        memory_mb,
        pool,
    })
}

fn text_field(pos: usize, fields: &Map<String, Value>, field: &str) -> Result<String> {
    scalar_text(fields.get(field)).ok_or_else(|| {
        InventoryError::validation(format!("nodes[{pos}].{field} must be a scalar value"))
    })
}

/// Running per-role tallies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RoleCounts {
    control_plane: usize,
    worker: usize,
    etcd: usize,
    api_lb: usize,
}

impl RoleCounts {
    fn record(&mut self, role: Role) {
        match role {
            Role::ControlPlane => self.control_plane += 1,
            Role::Worker => self.worker += 1,
            Role::Etcd => self.etcd += 1,
            Role::ApiLb => self.api_lb += 1,
        }
    }

    fn check_quorum(&self) -> Result<()> {
        if self.control_plane < MIN_CONTROL_PLANE_NODES {
            return Err(InventoryError::validation(
                "inventory requires at least one control-plane node",
            ));
        }
        if self.etcd < MIN_ETCD_NODES {
            return Err(InventoryError::validation(
                "inventory requires at least three etcd nodes",
            ));
        }
        Ok(())
    }
}
