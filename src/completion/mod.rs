//! Structured word suggestions from a hosted generative model.
//!
//! One request, one typed response: the model is given a fixed instruction
//! and a required output schema of two equal-length string arrays. No retry,
//! no streaming.

mod gemini;

pub use gemini::GeminiGenerator;

use crate::types::{DictionaryError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Fixed system instruction for the suggestion call.
pub const SYSTEM_INSTRUCTION: &str = "Given a description, give out five words that match \
     the user's description the closest along with their definitions";

/// JSON schema the model output must conform to.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "words": {
                "type": "array",
                "items": {"type": "string"},
                "description": "List of words that match the user's description"
            },
            "definitions": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Definition of each word picked"
            }
        },
        "required": ["words", "definitions"]
    })
}

/// Parsed structured result: words and their definitions, index-aligned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordSuggestions {
    pub words: Vec<String>,
    pub definitions: Vec<String>,
}

/// One structured generation call against a hosted model.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Issue a single generation request and return the raw JSON text of the
    /// structured response.
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        schema: &serde_json::Value,
    ) -> Result<String>;
}

/// Client producing word suggestions for a free-text description.
///
/// Generic over [`GenerativeModel`] so tests can substitute a stub model.
pub struct SuggestionClient<G> {
    model: G,
}

impl<G: GenerativeModel> SuggestionClient<G> {
    pub fn new(model: G) -> Self {
        Self { model }
    }

    /// Ask the model for words matching the description.
    ///
    /// Fails with `GenerationError` if the remote call fails and with
    /// `SchemaValidationError` if the response cannot be parsed against the
    /// declared schema (including unequal sequence lengths).
    pub async fn describe_to_words(&self, description: &str) -> Result<WordSuggestions> {
        let raw = self
            .model
            .generate(SYSTEM_INSTRUCTION, description, &response_schema())
            .await?;

        let suggestions: WordSuggestions = serde_json::from_str(&raw).map_err(|e| {
            DictionaryError::SchemaValidationError(format!(
                "malformed structured output: {}",
                e
            ))
        })?;

        if suggestions.words.len() != suggestions.definitions.len() {
            return Err(DictionaryError::SchemaValidationError(format!(
                "words and definitions differ in length ({} vs {})",
                suggestions.words.len(),
                suggestions.definitions.len()
            )));
        }

        tracing::debug!(
            suggestions = suggestions.words.len(),
            "generated word suggestions"
        );

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_schema_requires_both_sequences() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert!(required.contains(&"words"));
        assert!(required.contains(&"definitions"));
        assert_eq!(schema["properties"]["words"]["items"]["type"], "string");
    }

    #[test]
    fn test_word_suggestions_roundtrip() {
        let body = r#"{"words": ["astronomer"], "definitions": ["a person who studies celestial objects"]}"#;
        let parsed: WordSuggestions = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.words, vec!["astronomer"]);
        assert_eq!(parsed.definitions.len(), 1);
    }
}
