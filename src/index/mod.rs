//! Hosted vector index client.
//!
//! The remote index is split the way the service itself is: a control plane
//! for index lifecycle (exists / create / describe) and a data plane bound to
//! the index's resolved network endpoint (fetch / upsert / query). The store
//! is generic over [`VectorIndexProvider`] so tests can run against an
//! in-memory stub with deterministic ranking.

mod pinecone;

pub use pinecone::{PineconeClient, PineconeIndex};

use crate::types::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placement for newly created serverless indexes.
#[derive(Debug, Clone, Serialize)]
pub struct ServerlessSpec {
    pub cloud: String,
    pub region: String,
}

impl Default for ServerlessSpec {
    fn default() -> Self {
        Self {
            cloud: "aws".to_string(),
            region: "us-east-1".to_string(),
        }
    }
}

/// Metadata stored alongside each vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VectorMetadata {
    pub word: String,
    pub description: String,
}

/// One (id, vector, metadata) record for upsert.
#[derive(Debug, Clone, Serialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: VectorMetadata,
}

/// A single similarity match returned by the index.
///
/// Ordering and tie-breaks are delegated entirely to the remote index.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryMatch {
    pub id: String,
    pub score: f32,
    pub metadata: Option<VectorMetadata>,
}

/// Data-plane operations against one index endpoint.
#[async_trait]
pub trait VectorIndexOps: Send + Sync {
    /// Fetch stored vectors by id. Absent ids are omitted from the result.
    async fn fetch(&self, ids: &[String]) -> Result<HashMap<String, Vec<f32>>>;

    /// Insert-or-update records keyed by id.
    async fn upsert(&self, records: &[VectorRecord]) -> Result<()>;

    /// Top-k similarity query, ordered by descending similarity.
    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<QueryMatch>>;
}

/// Control-plane operations for index lifecycle.
#[async_trait]
pub trait VectorIndexProvider: Send + Sync {
    type Index: VectorIndexOps;

    /// Whether the named index exists.
    async fn has_index(&self, name: &str) -> Result<bool>;

    /// Create a new index with the given dimensionality and placement.
    ///
    /// Dimensionality is immutable for the lifetime of the index.
    async fn create_index(&self, name: &str, dimension: usize, spec: &ServerlessSpec)
        -> Result<()>;

    /// Resolve the index's data-plane host.
    async fn describe_index(&self, name: &str) -> Result<String>;

    /// Bind a data-plane client to a resolved host.
    fn index(&self, host: &str) -> Self::Index;
}
