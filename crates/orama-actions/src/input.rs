//! Action payloads as the host platform delivers them (camelCase JSON).
//!
//! `whereConditions` and `facetsConfig` arrive as JSON-encoded strings and are
//! parsed by the action, not by serde.
use serde::{Deserialize, Serialize};

use orama_core::types::{SearchMode, SortOrder};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput {
    pub index_name: String,
    #[serde(default)]
    pub term: String,
    pub mode: Option<SearchMode>,
    pub properties: Option<Vec<String>>,
    pub limit: Option<u64>,
    pub where_conditions: Option<String>,
    pub sort_by_property: Option<String>,
    pub sort_by_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorSearchInput {
    pub index_name: String,
    #[serde(default)]
    pub term: String,
    pub limit: Option<u64>,
    pub where_conditions: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSearchInput {
    pub index_name: String,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub facets_config: String,
    pub mode: Option<SearchMode>,
    pub where_conditions: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiIndexSearchInput {
    pub index_names: Vec<String>,
    #[serde(default)]
    pub term: String,
    pub mode: Option<SearchMode>,
    #[serde(default)]
    pub merge_results: bool,
    pub where_conditions: Option<String>,
}
