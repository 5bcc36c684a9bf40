use crate::Result;
use crate::source::{DocumentFormat, FormatArg};
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read an inventory file and decode it into a document tree.
pub fn load_document(path: &Path, format: FormatArg) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read inventory file {}", path.display()))?;

    let format = format.resolve(path);
    tracing::debug!(path = %path.display(), %format, bytes = text.len(), "decoding inventory");

    decode_document(&text, format)
        .with_context(|| format!("parse {} inventory {}", format, path.display()))
}

/// Decode document text.
///
/// YAML anchors and `<<` merge keys are resolved before the tree is handed
/// on. Mapping keys must be strings. An empty document decodes to null.
pub fn decode_document(text: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(text)?),
        DocumentFormat::Yaml => {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            let mut doc: serde_yaml::Value = serde_yaml::from_str(text)?;
            doc.apply_merge()?;
            Ok(serde_json::to_value(doc)?)
        }
    }
}
