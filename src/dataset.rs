//! Dataset loading for bulk ingestion.
//!
//! Expects CSV with `Word` and `Description` columns.

use crate::types::{Document, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Word")]
    word: String,
    #[serde(rename = "Description")]
    description: String,
}

/// Read a CSV dataset into documents, preserving row order.
pub fn load_csv(path: &Path) -> Result<Vec<Document>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut documents = Vec::new();

    for row in reader.deserialize() {
        let row: Row = row?;
        documents.push(Document::new(row.word, row.description));
    }

    tracing::debug!(path = %path.display(), rows = documents.len(), "loaded dataset");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Word,Description").unwrap();
        writeln!(file, "cat,a small domesticated feline").unwrap();
        writeln!(file, "dog,a domesticated canine").unwrap();
        file.flush().unwrap();

        let documents = load_csv(file.path()).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].word, "cat");
        assert_eq!(documents[1].description, "a domesticated canine");
    }

    #[test]
    fn test_load_csv_missing_file() {
        let err = load_csv(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(matches!(
            err,
            crate::types::DictionaryError::CsvError(_)
        ));
    }
}
