//! Gemini embedding API client.

use crate::embeddings::EmbeddingProvider;
use crate::types::{DictionaryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini batch embedding request.
#[derive(Debug, Serialize)]
struct BatchEmbedRequest {
    requests: Vec<EmbedRequest>,
}

#[derive(Debug, Serialize)]
struct EmbedRequest {
    model: String,
    content: Content,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Gemini batch embedding response.
#[derive(Debug, Deserialize)]
struct BatchEmbedResponse {
    embeddings: Vec<EmbeddingValues>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

/// Gemini embedding provider.
pub struct GeminiEmbedder {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiEmbedder {
    /// Create a new Gemini embedder.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key
    /// * `model` - Model name (e.g., "gemini-embedding-001")
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
            client: Client::new(),
        }
    }

    /// Call the Gemini batchEmbedContents API.
    async fn call_api(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let request = BatchEmbedRequest {
            requests: texts
                .iter()
                .map(|text| EmbedRequest {
                    model: format!("models/{}", self.model),
                    content: Content {
                        parts: vec![Part { text: text.clone() }],
                    },
                })
                .collect(),
        };

        let url = format!(
            "{}/models/{}:batchEmbedContents",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DictionaryError::EmbeddingError(format!("Gemini API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DictionaryError::EmbeddingError(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let embed_response: BatchEmbedResponse = response.json().await.map_err(|e| {
            DictionaryError::EmbeddingError(format!("Failed to parse Gemini response: {}", e))
        })?;

        if embed_response.embeddings.len() != texts.len() {
            return Err(DictionaryError::EmbeddingError(format!(
                "Gemini returned {} embeddings for {} inputs",
                embed_response.embeddings.len(),
                texts.len()
            )));
        }

        Ok(embed_response
            .embeddings
            .into_iter()
            .map(|e| e.values)
            .collect())
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self.call_api(&[text.to_string()]).await?;

        embeddings.into_iter().next().ok_or_else(|| {
            DictionaryError::EmbeddingError("No embedding returned from Gemini".to_string())
        })
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        self.call_api(texts).await
    }
}
