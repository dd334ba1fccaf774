//! Gemini generateContent client with structured output.

use crate::completion::GenerativeModel;
use crate::types::{DictionaryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini generative model client.
pub struct GeminiGenerator {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiGenerator {
    /// Create a new generator.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key
    /// * `model` - Model name (e.g., "gemini-2.0-flash")
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiGenerator {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        schema: &serde_json::Value,
    ) -> Result<String> {
        let body = json!({
            "system_instruction": {
                "parts": [{"text": system_instruction}]
            },
            "contents": [
                {"role": "user", "parts": [{"text": user_text}]}
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            }
        });

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DictionaryError::GenerationError(format!("Gemini API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DictionaryError::GenerationError(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let data: serde_json::Value = response.json().await.map_err(|e| {
            DictionaryError::GenerationError(format!("Failed to parse Gemini response: {}", e))
        })?;

        extract_candidate_text(&data)
            .map(|s| s.to_string())
            .ok_or_else(|| {
                DictionaryError::GenerationError(
                    "Gemini response contained no candidate text".to_string(),
                )
            })
    }
}

/// Pull the single candidate's text out of a generateContent response.
fn extract_candidate_text(data: &serde_json::Value) -> Option<&str> {
    data.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_candidate_text() {
        let data = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "{\"words\": [], \"definitions\": []}"}]
                }
            }]
        });

        let text = extract_candidate_text(&data).unwrap();
        assert!(text.contains("words"));
    }

    #[test]
    fn test_extract_candidate_text_empty_response() {
        assert!(extract_candidate_text(&json!({})).is_none());
        assert!(extract_candidate_text(&json!({"candidates": []})).is_none());
    }
}
