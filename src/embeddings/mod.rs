//! Embedding generation against a hosted embedding service.
//!
//! The vector store is generic over [`EmbeddingProvider`] so tests can
//! substitute deterministic fixture embedders. Production use goes through
//! [`GeminiEmbedder`].

mod gemini;

pub use gemini::GeminiEmbedder;

use crate::types::Result;
use async_trait::async_trait;

/// Fixed sentinel input used to probe the embedding service for vector
/// dimensionality at index-provisioning time.
pub const DIMENSION_PROBE: &str = "dimension-probe";

/// Trait for generating embeddings from text.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts in one request.
    ///
    /// Returns one vector per input, in input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
