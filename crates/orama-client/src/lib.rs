//! HTTP implementation of [`SearchClient`] for hosted Orama indexes.
//!
//! Each index is queried with `POST {endpoint}/search?api-key=<key>` and a
//! form body `q=<JSON search params>`. Several indexes are queried
//! concurrently; with `merge_results` their hits are folded into one list
//! ranked by descending `score`.
use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use orama_core::coerce;
use orama_core::config::ClientSettings;
use orama_core::types::{ConnectionConfig, IndexConnection, SearchParams};
use orama_core::{ClientError, HttpFailure, SearchClient};

#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
}

impl HttpSearchClient {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(settings.connect_timeout_ms))
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::new(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    async fn search_one(&self, index: &IndexConnection, params: &SearchParams) -> Result<Value, ClientError> {
        let url = format!("{}/search", index.endpoint.trim_end_matches('/'));
        let query = serde_json::to_string(params)
            .map_err(|e| ClientError::new(format!("Failed to encode search params: {e}")))?;
        debug!(endpoint = %index.endpoint, "Querying index");

        let response = self
            .client
            .post(&url)
            .query(&[("api-key", index.api_key.as_str())])
            .form(&[("q", query.as_str())])
            .send()
            .await
            .map_err(|e| {
                // the URL carries the api key
                let e = e.without_url();
                if e.is_timeout() {
                    ClientError::new(format!("Search request timeout: {e}"))
                } else if e.is_connect() {
                    ClientError::new(format!("Failed to connect to search service: {e}"))
                } else {
                    ClientError::new(format!("Search request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(ClientError::new(format!("Search service returned {status}")).with_http(HttpFailure {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            }));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::new(format!("Failed to read search response: {e}")))?;
        serde_json::from_str(&text).map_err(|e| ClientError::new(format!("Failed to parse search response: {e}")))
    }
}

impl Default for HttpSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, connection: &ConnectionConfig, params: &SearchParams) -> Result<Value, ClientError> {
        match connection.indexes.as_slice() {
            [] => Err(ClientError::new("No indexes to search")),
            [index] => self.search_one(index, params).await,
            indexes => {
                let responses = try_join_all(indexes.iter().map(|index| self.search_one(index, params))).await?;
                if connection.merge_results {
                    Ok(merge(responses))
                } else {
                    Ok(Value::Array(responses))
                }
            }
        }
    }
}

/// Fold per-index responses into one: hits ranked by descending `score`
/// (ties keep index order), counts summed, slowest `elapsed` kept.
pub fn merge(responses: Vec<Value>) -> Value {
    let mut hits = Vec::new();
    let mut count = 0u64;
    let mut elapsed = 0f64;
    for response in &responses {
        hits.extend(coerce::hits(response));
        count = count.saturating_add(coerce::count(response));
        elapsed = elapsed.max(coerce::elapsed(response));
    }
    hits.sort_by(|a, b| score(b).total_cmp(&score(a)));
    json!({ "hits": hits, "count": count, "elapsed": elapsed })
}

fn score(hit: &Value) -> f64 {
    hit.get("score").and_then(Value::as_f64).unwrap_or(f64::NEG_INFINITY)
}
