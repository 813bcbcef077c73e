//! Domain types shared by the action layer and the search transport.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque hit record as returned by the remote service.
pub type Hit = Value;

/// Credentials for one named index.
///
/// - `name`: unique key inside the registry
/// - `endpoint`: base URL of the hosted index
/// - `api_key`: secret, never printed by `Debug`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
}

impl IndexConfig {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { name: name.into(), endpoint: endpoint.into(), api_key: api_key.into() }
    }

    pub fn connection(&self) -> IndexConnection {
        IndexConnection { endpoint: self.endpoint.clone(), api_key: self.api_key.clone() }
    }
}

impl fmt::Debug for IndexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexConfig")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

/// Retrieval strategy requested from the remote service.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Fulltext,
    Vector,
    Hybrid,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fulltext" => Ok(Self::Fulltext),
            "vector" => Ok(Self::Vector),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(format!("Unknown search mode: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortBy {
    pub property: String,
    pub order: SortOrder,
}

/// Query descriptor handed to the remote client. Absent options are not
/// serialized at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SearchMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Value>,
}

impl SearchParams {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Option<SearchMode>) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: Option<Value>) -> Self {
        self.filter = filter;
        self
    }
}

/// One endpoint/key pair of a connection descriptor.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexConnection {
    pub endpoint: String,
    pub api_key: String,
}

impl fmt::Debug for IndexConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexConnection")
            .field("endpoint", &self.endpoint)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

/// Connection descriptor: which indexes to query and whether the client
/// should merge their hits into one ranked list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub indexes: Vec<IndexConnection>,
    pub merge_results: bool,
}

impl ConnectionConfig {
    pub fn single(index: &IndexConfig) -> Self {
        Self { indexes: vec![index.connection()], merge_results: false }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub hits: Vec<Hit>,
    pub count: u64,
    pub elapsed: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FacetedSearchResult {
    pub hits: Vec<Hit>,
    pub count: u64,
    pub facets: Map<String, Value>,
    pub elapsed: f64,
}

/// Per-index slice of a multi-index response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexSearchResult {
    pub index_name: String,
    pub hits: Vec<Hit>,
    pub count: u64,
    pub elapsed: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultiIndexSearchResult {
    pub results: Vec<IndexSearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_hits: Option<Vec<Hit>>,
    pub total_count: u64,
}

/// Public view of a registered index; the key is never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexSummary {
    pub name: String,
    pub endpoint: String,
}

impl From<&IndexConfig> for IndexSummary {
    fn from(config: &IndexConfig) -> Self {
        Self { name: config.name.clone(), endpoint: config.endpoint.clone() }
    }
}
