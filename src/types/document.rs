//! Dictionary documents and content-derived identity.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A dictionary entry: a word paired with its description.
///
/// Identity is derived from the description text alone (see [`generate_id`]),
/// so re-ingesting the same description never produces a duplicate entry in
/// the remote index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// The word being defined.
    pub word: String,

    /// Free-text description of the word.
    pub description: String,
}

impl Document {
    /// Create a new document.
    pub fn new(word: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            description: description.into(),
        }
    }

    /// Stable id for this document, derived from its description.
    pub fn id(&self) -> String {
        generate_id(&self.description)
    }
}

/// Deterministic document id: lowercase hex SHA-256 of the content.
///
/// A pure function of the input text. Identical descriptions always map to
/// the same id; distinct descriptions collide only with negligible
/// probability.
pub fn generate_id(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Normalize a stored word for display.
///
/// Underscores become spaces and each token is title-cased, so
/// `"guide_dog"` renders as `"Guide Dog"`.
pub fn display_label(word: &str) -> String {
    word.replace('_', " ")
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_generate_id_deterministic() {
        let a = generate_id("a small domesticated feline");
        let b = generate_id("a small domesticated feline");
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_id_distinct_content() {
        let cat = generate_id("a small domesticated feline");
        let dog = generate_id("a domesticated canine");
        assert_ne!(cat, dog);
    }

    #[test]
    fn test_generate_id_is_hex_sha256() {
        let id = generate_id("astronomer");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_duplicate_descriptions_share_id() {
        let docs = vec![
            Document::new("cat", "a small domesticated feline"),
            Document::new("dog", "a domesticated canine"),
            Document::new("cat", "a small domesticated feline"),
        ];
        assert_eq!(docs[0].id(), docs[2].id());
        assert_ne!(docs[0].id(), docs[1].id());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("guide_dog"), "Guide Dog");
        assert_eq!(display_label("cat"), "Cat");
        assert_eq!(display_label("ASTRONOMER"), "Astronomer");
        assert_eq!(display_label(""), "");
    }

    proptest! {
        #[test]
        fn prop_generate_id_pure(content in ".*") {
            let first = generate_id(&content);
            let second = generate_id(&content);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), 64);
        }
    }
}
