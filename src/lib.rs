//! Reverse dictionary: describe a concept, get candidate words back.
//!
//! Two independent lookup paths from one query string:
//! - [`store::VectorStore`]: top-k similarity search over a hosted vector
//!   index of (word, description) documents.
//! - [`completion::SuggestionClient`]: one structured-output call to a hosted
//!   generative model.
//!
//! Both are thin request/response wrappers; neither depends on the other.

pub mod completion;
pub mod config;
pub mod dataset;
pub mod embeddings;
pub mod index;
pub mod store;
pub mod types;

pub use completion::{SuggestionClient, WordSuggestions};
pub use config::Config;
pub use store::{IngestReport, VectorStore};
pub use types::{DictionaryError, Document, Result};
