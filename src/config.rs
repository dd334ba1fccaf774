//! Runtime configuration loaded from the process environment.
//!
//! Required variables:
//! - PINECONE_API_KEY: vector index service key
//! - GEMINI_API_KEY: embedding / generative model service key
//!
//! Optional overrides:
//! - REVDICT_INDEX: index name (default "reverse-dictionary")
//! - REVDICT_EMBEDDING_MODEL: embedding model (default "gemini-embedding-001")
//! - REVDICT_COMPLETION_MODEL: generative model (default "gemini-2.0-flash")

use crate::types::{DictionaryError, Result};

pub const DEFAULT_INDEX_NAME: &str = "reverse-dictionary";
pub const DEFAULT_EMBEDDING_MODEL: &str = "gemini-embedding-001";
pub const DEFAULT_COMPLETION_MODEL: &str = "gemini-2.0-flash";

/// Validated configuration, constructed once at process start and passed by
/// reference into each client's constructor. No ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Vector index service key.
    pub pinecone_api_key: String,

    /// Embedding / generative model service key.
    pub gemini_api_key: String,

    /// Name of the remote vector index.
    pub index_name: String,

    /// Embedding model identifier.
    pub embedding_model: String,

    /// Generative model identifier.
    pub completion_model: String,
}

impl Config {
    /// Load configuration from the environment, failing eagerly on any
    /// missing required key.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            pinecone_api_key: require_var("PINECONE_API_KEY")?,
            gemini_api_key: require_var("GEMINI_API_KEY")?,
            index_name: std::env::var("REVDICT_INDEX")
                .unwrap_or_else(|_| DEFAULT_INDEX_NAME.to_string()),
            embedding_model: std::env::var("REVDICT_EMBEDDING_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
            completion_model: std::env::var("REVDICT_COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            DictionaryError::ConfigError(format!("{} environment variable is required", name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_with_defaults() {
        std::env::set_var("PINECONE_API_KEY", "pc-test-key");
        std::env::set_var("GEMINI_API_KEY", "gm-test-key");
        // Defaults only apply when the overrides are absent.
        std::env::remove_var("REVDICT_INDEX");
        std::env::remove_var("REVDICT_EMBEDDING_MODEL");
        std::env::remove_var("REVDICT_COMPLETION_MODEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.pinecone_api_key, "pc-test-key");
        assert_eq!(config.gemini_api_key, "gm-test-key");
        assert_eq!(config.index_name, DEFAULT_INDEX_NAME);
        assert_eq!(config.embedding_model, DEFAULT_EMBEDDING_MODEL);
        assert_eq!(config.completion_model, DEFAULT_COMPLETION_MODEL);
    }

    #[test]
    fn test_require_var_missing() {
        let err = require_var("REVDICT_TEST_UNSET_VAR").unwrap_err();
        assert!(matches!(err, DictionaryError::ConfigError(_)));
        assert!(err.to_string().contains("REVDICT_TEST_UNSET_VAR"));
    }

    #[test]
    fn test_require_var_blank_rejected() {
        std::env::set_var("REVDICT_TEST_BLANK_VAR", "   ");
        let err = require_var("REVDICT_TEST_BLANK_VAR").unwrap_err();
        assert!(matches!(err, DictionaryError::ConfigError(_)));
    }
}
