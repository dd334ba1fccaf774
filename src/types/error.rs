//! Error types for the reverse dictionary services.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Errors surfaced by the vector store and completion clients.
///
/// Every variant propagates to the immediate caller uncaught; there is no
/// retry or fallback between the two lookup paths.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Index creation or lookup failure during provisioning.
    #[error("Provisioning error: {0}")]
    ProvisioningError(String),

    /// Embedding request failure.
    #[error("Embedding error: {0}")]
    EmbeddingError(String),

    /// Index write failure.
    #[error("Upsert error: {0}")]
    UpsertError(String),

    /// Index read failure.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Completion request failure.
    #[error("Generation error: {0}")]
    GenerationError(String),

    /// Structured output could not be parsed against the declared schema.
    #[error("Schema validation error: {0}")]
    SchemaValidationError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
