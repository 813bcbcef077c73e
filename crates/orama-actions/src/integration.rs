use std::sync::Arc;

use tracing::info;

use orama_core::coerce;
use orama_core::types::{
    ConnectionConfig, FacetedSearchResult, IndexConfig, IndexSummary, MultiIndexSearchResult, SearchMode,
    SearchParams, SearchResult, SortBy,
};
use orama_core::{Result, SearchClient};

use crate::dispatch;
use crate::enrich::{execute, Action};
use crate::input::{FacetSearchInput, MultiIndexSearchInput, SearchInput, VectorSearchInput};
use crate::registry::IndexRegistry;

/// A registered integration: the validated index registry plus the client
/// every action dispatches through.
pub struct Integration<C>
where
    C: SearchClient + ?Sized,
{
    registry: IndexRegistry,
    client: Arc<C>,
}

impl<C> Integration<C>
where
    C: SearchClient + ?Sized,
{
    /// Validate the configured indexes. A configuration error here must keep
    /// the integration inactive.
    pub fn register(indexes: Vec<IndexConfig>, client: Arc<C>) -> Result<Self> {
        let registry = IndexRegistry::validate(indexes)?;
        info!(indexes = registry.len(), "Orama integration registered successfully");
        Ok(Self { registry, client })
    }

    pub fn unregister(self) {
        info!("Orama integration unregistered");
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    pub fn list_indexes(&self) -> Vec<IndexSummary> {
        self.registry.summaries()
    }

    pub async fn search(&self, input: SearchInput) -> Result<SearchResult> {
        let index = self.registry.resolve(&input.index_name)?;
        let mut params = SearchParams::new(input.term)
            .with_mode(input.mode)
            .with_limit(input.limit)
            .with_filter(coerce::parse_where(input.where_conditions.as_deref()));
        params.properties = input.properties.filter(|properties| !properties.is_empty());
        params.sort_by = input
            .sort_by_property
            .filter(|property| !property.trim().is_empty())
            .map(|property| SortBy { property, order: input.sort_by_order.unwrap_or_default() });

        let response = execute(self.client.as_ref(), Action::Search, &ConnectionConfig::single(index), &params).await?;
        Ok(plain_result(&coerce::single(response)))
    }

    pub async fn vector_search(&self, input: VectorSearchInput) -> Result<SearchResult> {
        let index = self.registry.resolve(&input.index_name)?;
        let params = SearchParams::new(input.term)
            .with_mode(Some(SearchMode::Vector))
            .with_limit(input.limit)
            .with_filter(coerce::parse_where(input.where_conditions.as_deref()));

        let response = execute(self.client.as_ref(), Action::VectorSearch, &ConnectionConfig::single(index), &params).await?;
        Ok(plain_result(&coerce::single(response)))
    }

    pub async fn search_with_facets(&self, input: FacetSearchInput) -> Result<FacetedSearchResult> {
        let index = self.registry.resolve(&input.index_name)?;
        let facets = coerce::parse_facets(Some(&input.facets_config))?;
        let mut params = SearchParams::new(input.term)
            .with_mode(input.mode)
            .with_limit(input.limit)
            .with_filter(coerce::parse_where(input.where_conditions.as_deref()));
        params.facets = Some(facets);

        let response = execute(self.client.as_ref(), Action::SearchWithFacets, &ConnectionConfig::single(index), &params).await?;
        let result = coerce::single(response);
        Ok(FacetedSearchResult {
            hits: coerce::hits(&result),
            count: coerce::count(&result),
            facets: coerce::facets(&result),
            elapsed: coerce::elapsed(&result),
        })
    }

    pub async fn multi_index_search(&self, input: MultiIndexSearchInput) -> Result<MultiIndexSearchResult> {
        dispatch::multi_index_search(&self.registry, self.client.as_ref(), input).await
    }
}

fn plain_result(result: &serde_json::Value) -> SearchResult {
    SearchResult { hits: coerce::hits(result), count: coerce::count(result), elapsed: coerce::elapsed(result) }
}
