//! Reading inventory documents from disk into a generic document tree.

pub mod format;
pub mod load;

pub use format::{DocumentFormat, FormatArg};
pub use load::{decode_document, load_document};
