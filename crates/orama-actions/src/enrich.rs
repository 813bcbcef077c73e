//! The one place remote failures are turned into user-facing errors.
//!
//! Every action sends its query through [`execute`], so the message format
//! and the logging are identical across actions.
use serde_json::Value;
use tracing::{debug, error};

use orama_core::types::{ConnectionConfig, SearchParams};
use orama_core::{ClientError, Error, Result, SearchClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    VectorSearch,
    SearchWithFacets,
    MultiIndexSearch,
}

impl Action {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::VectorSearch => "vector search",
            Self::SearchWithFacets => "search with facets",
            Self::MultiIndexSearch => "multi-index search",
        }
    }
}

/// Compose the error message for a failed remote call.
///
/// The response body is preferred; the status line is only used when a
/// response exists but its body could not be read.
pub fn enrich(action: Action, err: &ClientError) -> Error {
    let message = if err.message.trim().is_empty() { "Unknown error" } else { err.message.as_str() };
    let mut composed = format!("Error performing {}: {message}", action.label());
    if let Some(http) = &err.http {
        match &http.body {
            Some(body) => composed.push_str(&format!(" - API Response: {body}")),
            None => composed.push_str(&format!(" - Status: {} {}", http.status, http.status_text)),
        }
    }
    error!(action = action.label(), "{composed}");
    Error::Search(composed)
}

/// Issue one search call, mapping any client failure through [`enrich`].
pub async fn execute<C>(client: &C, action: Action, connection: &ConnectionConfig, params: &SearchParams) -> Result<Value>
where
    C: SearchClient + ?Sized,
{
    debug!(
        action = action.label(),
        indexes = connection.indexes.len(),
        merge_results = connection.merge_results,
        params = %serde_json::to_string(params).unwrap_or_default(),
        "Dispatching search"
    );
    client.search(connection, params).await.map_err(|e| enrich(action, &e))
}
