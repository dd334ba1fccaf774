//! Pinecone REST API client (control plane and data plane).

use crate::index::{
    QueryMatch, ServerlessSpec, VectorIndexOps, VectorIndexProvider, VectorRecord,
};
use crate::types::{DictionaryError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

const PINECONE_CONTROLLER_URL: &str = "https://api.pinecone.io";

/// Index description returned by the control plane.
#[derive(Debug, Deserialize)]
struct IndexDescription {
    host: String,
}

/// Fetch response: mapping of id to stored vector.
#[derive(Debug, Deserialize)]
struct FetchResponse {
    #[serde(default)]
    vectors: HashMap<String, FetchedVector>,
}

#[derive(Debug, Deserialize)]
struct FetchedVector {
    values: Vec<f32>,
}

/// Query response: matches ordered by descending similarity.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
}

/// Pinecone control-plane client.
pub struct PineconeClient {
    api_key: String,
    controller_url: String,
    client: Client,
}

impl PineconeClient {
    /// Create a new control-plane client.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            controller_url: PINECONE_CONTROLLER_URL.to_string(),
            client: Client::new(),
        }
    }

    async fn describe(&self, name: &str) -> Result<reqwest::Response> {
        self.client
            .get(format!("{}/indexes/{}", self.controller_url, name))
            .header("Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                DictionaryError::ProvisioningError(format!(
                    "Pinecone describe request failed: {}",
                    e
                ))
            })
    }
}

#[async_trait]
impl VectorIndexProvider for PineconeClient {
    type Index = PineconeIndex;

    async fn has_index(&self, name: &str) -> Result<bool> {
        let response = self.describe(name).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(DictionaryError::ProvisioningError(format!(
                    "Pinecone API error ({}): {}",
                    status, error_text
                )))
            }
        }
    }

    async fn create_index(
        &self,
        name: &str,
        dimension: usize,
        spec: &ServerlessSpec,
    ) -> Result<()> {
        let body = json!({
            "name": name,
            "dimension": dimension,
            "metric": "cosine",
            "spec": {
                "serverless": {
                    "cloud": spec.cloud,
                    "region": spec.region,
                }
            }
        });

        let response = self
            .client
            .post(format!("{}/indexes", self.controller_url))
            .header("Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DictionaryError::ProvisioningError(format!("Pinecone create request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DictionaryError::ProvisioningError(format!(
                "Pinecone index creation failed ({}): {}",
                status, error_text
            )));
        }

        Ok(())
    }

    async fn describe_index(&self, name: &str) -> Result<String> {
        let response = self.describe(name).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DictionaryError::ProvisioningError(format!(
                "Pinecone describe failed ({}): {}",
                status, error_text
            )));
        }

        let description: IndexDescription = response.json().await.map_err(|e| {
            DictionaryError::ProvisioningError(format!(
                "Failed to parse Pinecone index description: {}",
                e
            ))
        })?;

        Ok(description.host)
    }

    fn index(&self, host: &str) -> PineconeIndex {
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };

        PineconeIndex {
            api_key: self.api_key.clone(),
            base_url,
            client: self.client.clone(),
        }
    }
}

/// Pinecone data-plane client bound to one index host.
pub struct PineconeIndex {
    api_key: String,
    base_url: String,
    client: Client,
}

#[async_trait]
impl VectorIndexOps for PineconeIndex {
    async fn fetch(&self, ids: &[String]) -> Result<HashMap<String, Vec<f32>>> {
        let query: Vec<(&str, &str)> = ids.iter().map(|id| ("ids", id.as_str())).collect();

        let response = self
            .client
            .get(format!("{}/vectors/fetch", self.base_url))
            .header("Api-Key", &self.api_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                DictionaryError::QueryError(format!("Pinecone fetch request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DictionaryError::QueryError(format!(
                "Pinecone fetch failed ({}): {}",
                status, error_text
            )));
        }

        let fetched: FetchResponse = response.json().await.map_err(|e| {
            DictionaryError::QueryError(format!("Failed to parse Pinecone fetch response: {}", e))
        })?;

        Ok(fetched
            .vectors
            .into_iter()
            .map(|(id, v)| (id, v.values))
            .collect())
    }

    async fn upsert(&self, records: &[VectorRecord]) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/vectors/upsert", self.base_url))
            .header("Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&json!({ "vectors": records }))
            .send()
            .await
            .map_err(|e| {
                DictionaryError::UpsertError(format!("Pinecone upsert request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DictionaryError::UpsertError(format!(
                "Pinecone upsert failed ({}): {}",
                status, error_text
            )));
        }

        Ok(())
    }

    async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        include_metadata: bool,
    ) -> Result<Vec<QueryMatch>> {
        let request = QueryRequest {
            vector,
            top_k,
            include_metadata,
        };

        let response = self
            .client
            .post(format!("{}/query", self.base_url))
            .header("Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DictionaryError::QueryError(format!("Pinecone query request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DictionaryError::QueryError(format!(
                "Pinecone query failed ({}): {}",
                status, error_text
            )));
        }

        let parsed: QueryResponse = response.json().await.map_err(|e| {
            DictionaryError::QueryError(format!("Failed to parse Pinecone query response: {}", e))
        })?;

        Ok(parsed.matches)
    }
}
