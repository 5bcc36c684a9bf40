//! Error type for inventory validation.

use crate::inventory::coerce::CoerceError;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The document or one of its entries does not have the expected shape.
    #[error("{0}")]
    Shape(String),

    /// A shape-correct entry, or the inventory as a whole, breaks a rule.
    #[error("{message}")]
    Validation {
        message: String,
        #[source]
        source: Option<CoerceError>,
    },
}

impl InventoryError {
    pub fn shape(message: impl Into<String>) -> Self {
        InventoryError::Shape(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        InventoryError::Validation {
            message: message.into(),
            source: None,
        }
    }

    pub fn coercion(message: impl Into<String>, source: CoerceError) -> Self {
        InventoryError::Validation {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Short label for logs: `shape` or `validation`.
    pub fn kind(&self) -> &'static str {
        match self {
            InventoryError::Shape(_) => "shape",
            InventoryError::Validation { .. } => "validation",
        }
    }
}
