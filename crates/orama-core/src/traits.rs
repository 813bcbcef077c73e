use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;
use crate::types::{ConnectionConfig, SearchParams};

/// Executes queries against the hosted search service.
///
/// Returns a single result object, or an array of result objects (one per
/// connection entry, in order) when several indexes are queried without
/// merging. Result objects carry `hits`, `count`, `elapsed` and, when facets
/// were requested, `facets`.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, connection: &ConnectionConfig, params: &SearchParams) -> Result<Value, ClientError>;
}
