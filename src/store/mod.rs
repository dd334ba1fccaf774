//! Vector store wrapper: lazy index provisioning, deduplicated batch
//! ingestion, and top-k similarity queries against a hosted index.
//!
//! The store contributes no ranking logic of its own; similarity metric and
//! tie-break order are delegated entirely to the remote index. Its job is
//! request shaping and content-hash dedup.

use crate::embeddings::{EmbeddingProvider, DIMENSION_PROBE};
use crate::index::{
    QueryMatch, ServerlessSpec, VectorIndexOps, VectorIndexProvider, VectorMetadata, VectorRecord,
};
use crate::types::{DictionaryError, Document, Result};
use std::collections::HashSet;
use tokio::sync::OnceCell;

/// Documents per ingestion batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Default number of query results.
pub const DEFAULT_TOP_K: usize = 5;

/// Outcome of one ingestion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Documents embedded and written in this run.
    pub upserted: usize,

    /// Documents skipped because their id was already present (in the remote
    /// store or earlier in this run).
    pub skipped: usize,
}

/// Stateless wrapper around a hosted vector index, except for the one-time
/// initialized endpoint.
///
/// Generic over the embedding provider and index provider so both can be
/// stubbed in tests.
pub struct VectorStore<E, P: VectorIndexProvider> {
    embedder: E,
    provider: P,
    index_name: String,
    placement: ServerlessSpec,
    batch_size: usize,
    index: OnceCell<P::Index>,
}

impl<E, P> VectorStore<E, P>
where
    E: EmbeddingProvider,
    P: VectorIndexProvider,
{
    /// Create a store for the named index with default batch size and
    /// placement.
    pub fn new(embedder: E, provider: P, index_name: impl Into<String>) -> Self {
        Self {
            embedder,
            provider,
            index_name: index_name.into(),
            placement: ServerlessSpec::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            index: OnceCell::new(),
        }
    }

    /// Override the ingestion batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Override the placement used if the index has to be created.
    pub fn with_placement(mut self, placement: ServerlessSpec) -> Self {
        self.placement = placement;
        self
    }

    /// Idempotent initialization: probe embedding dimensionality, create the
    /// index if absent, and cache the resolved data-plane endpoint.
    ///
    /// Safe to call repeatedly and from concurrent callers; the check-and-
    /// create sequence runs at most once per store (single-flight via
    /// [`OnceCell`]).
    pub async fn ensure_ready(&self) -> Result<()> {
        self.endpoint().await.map(|_| ())
    }

    async fn endpoint(&self) -> Result<&P::Index> {
        self.index
            .get_or_try_init(|| async {
                let probe = self.embedder.embed(DIMENSION_PROBE).await.map_err(|e| {
                    DictionaryError::ProvisioningError(format!("dimension probe failed: {}", e))
                })?;
                let dimension = probe.len();

                if !self.provider.has_index(&self.index_name).await? {
                    self.provider
                        .create_index(&self.index_name, dimension, &self.placement)
                        .await?;
                    tracing::info!(
                        index = %self.index_name,
                        dimension,
                        "created vector index"
                    );
                }

                let host = self.provider.describe_index(&self.index_name).await?;
                Ok(self.provider.index(&host))
            })
            .await
    }

    /// Ingest documents in sequential batches, skipping every id already
    /// present in the remote store.
    ///
    /// Per batch: fetch the batch's ids, embed only the new descriptions with
    /// one batch call, and upsert the resulting records. Batches with zero
    /// new documents perform no embedding and no upsert call. A failing batch
    /// does not roll back prior batches; re-running is safe because ids are
    /// content-derived.
    pub async fn ingest(&self, documents: &[Document]) -> Result<IngestReport> {
        let index = self.endpoint().await?;
        let mut report = IngestReport::default();
        // Ids written earlier in this run; collapses duplicate descriptions
        // that the remote fetch cannot see yet.
        let mut seen: HashSet<String> = HashSet::new();

        for batch in documents.chunks(self.batch_size) {
            let ids: Vec<String> = batch.iter().map(|doc| doc.id()).collect();
            let existing = index.fetch(&ids).await?;

            let mut new_docs: Vec<(&Document, String)> = Vec::new();
            for (doc, id) in batch.iter().zip(ids) {
                if existing.contains_key(&id) || !seen.insert(id.clone()) {
                    report.skipped += 1;
                    continue;
                }
                new_docs.push((doc, id));
            }

            if new_docs.is_empty() {
                continue;
            }

            let texts: Vec<String> = new_docs
                .iter()
                .map(|(doc, _)| doc.description.clone())
                .collect();
            let embeddings = self.embedder.embed_batch(&texts).await?;

            if embeddings.len() != new_docs.len() {
                return Err(DictionaryError::EmbeddingError(format!(
                    "expected {} embeddings, got {}",
                    new_docs.len(),
                    embeddings.len()
                )));
            }

            let records: Vec<VectorRecord> = new_docs
                .into_iter()
                .zip(embeddings)
                .map(|((doc, id), values)| VectorRecord {
                    id,
                    values,
                    metadata: VectorMetadata {
                        word: doc.word.clone(),
                        description: doc.description.clone(),
                    },
                })
                .collect();

            index.upsert(&records).await?;
            report.upserted += records.len();
            tracing::debug!(
                index = %self.index_name,
                batch_new = records.len(),
                batch_total = batch.len(),
                "upserted batch"
            );
        }

        Ok(report)
    }

    /// Embed the query text and return up to `top_k` matches, ordered by
    /// descending similarity, with metadata included.
    ///
    /// Initializes the index implicitly if [`ensure_ready`](Self::ensure_ready)
    /// has not been called yet. Every failure on this path — index not ready,
    /// embedding failure, or the search call itself — surfaces as
    /// [`DictionaryError::QueryError`].
    pub async fn query(&self, text: &str, top_k: usize) -> Result<Vec<QueryMatch>> {
        let index = self
            .endpoint()
            .await
            .map_err(|e| DictionaryError::QueryError(format!("index not ready: {}", e)))?;
        let vector = self
            .embedder
            .embed(text)
            .await
            .map_err(|e| DictionaryError::QueryError(format!("query embedding failed: {}", e)))?;
        index.query(&vector, top_k, true).await
    }
}
