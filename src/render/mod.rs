//! Output rendering.

pub mod json;

pub use json::{OutputStyle, render_nodes_json};
