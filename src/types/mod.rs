//! Core data types and errors.

mod document;
mod error;

pub use document::{display_label, generate_id, Document};
pub use error::{DictionaryError, Result};
