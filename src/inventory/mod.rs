//! Inventory layer: role set, per-entry rules and the normalized node record.
//!
//! This module performs no I/O. It takes an already-decoded document tree
//! and either returns the normalized nodes or the first rule that failed.
//! - Role (closed set, per-role pool rule)
//! - Field coercion (text and integer fields)
//! - Validation (per-entry checks, then cluster-wide quorum checks)

pub mod coerce;
pub mod node;
pub mod role;
pub mod validate;

pub use node::{NodesDocument, NormalizedNode};
pub use role::{PoolRule, Role};
pub use validate::validate_inventory;
