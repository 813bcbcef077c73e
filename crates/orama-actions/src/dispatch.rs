//! Multi-index search: resolve every name, issue one client call, then
//! republish the response either as one merged view or as a per-index
//! breakdown.
use serde_json::Value;

use orama_core::coerce;
use orama_core::types::{ConnectionConfig, IndexSearchResult, MultiIndexSearchResult, SearchParams};
use orama_core::{Error, Result, SearchClient};

use crate::enrich::{execute, Action};
use crate::input::MultiIndexSearchInput;
use crate::registry::IndexRegistry;

pub const MERGED_INDEX_NAME: &str = "merged";

pub async fn multi_index_search<C>(
    registry: &IndexRegistry,
    client: &C,
    input: MultiIndexSearchInput,
) -> Result<MultiIndexSearchResult>
where
    C: SearchClient + ?Sized,
{
    if input.index_names.is_empty() {
        return Err(Error::Search(format!("Error performing {}: no index names supplied", Action::MultiIndexSearch.label())));
    }
    // All names resolve before anything goes over the wire.
    let indexes = input
        .index_names
        .iter()
        .map(|name| registry.resolve(name).map(|config| config.connection()))
        .collect::<Result<Vec<_>>>()?;

    let connection = ConnectionConfig { indexes, merge_results: input.merge_results };
    let params = SearchParams::new(input.term)
        .with_mode(input.mode)
        .with_filter(coerce::parse_where(input.where_conditions.as_deref()));

    let response = execute(client, Action::MultiIndexSearch, &connection, &params).await?;
    Ok(reshape(response, &input.index_names, input.merge_results))
}

/// Turn the raw client response into the action output.
///
/// Unmerged entries are paired with the requested names by position; an
/// entry without a corresponding name is labelled `index_<position>`.
pub fn reshape(response: Value, index_names: &[String], merged: bool) -> MultiIndexSearchResult {
    if merged {
        let result = coerce::single(response);
        let hits = coerce::hits(&result);
        let count = coerce::count(&result);
        return MultiIndexSearchResult {
            results: vec![IndexSearchResult {
                index_name: MERGED_INDEX_NAME.to_string(),
                hits: hits.clone(),
                count,
                elapsed: coerce::elapsed(&result),
            }],
            merged_hits: Some(hits),
            total_count: count,
        };
    }

    let results: Vec<IndexSearchResult> = coerce::entries(response)
        .iter()
        .enumerate()
        .map(|(position, entry)| IndexSearchResult {
            index_name: index_names.get(position).cloned().unwrap_or_else(|| format!("index_{position}")),
            hits: coerce::hits(entry),
            count: coerce::count(entry),
            elapsed: coerce::elapsed(entry),
        })
        .collect();
    let total_count = results.iter().map(|r| r.count).fold(0u64, u64::saturating_add);
    MultiIndexSearchResult { results, merged_hits: None, total_count }
}
