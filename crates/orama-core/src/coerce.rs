//! Lenient readers for remote responses and JSON-encoded action inputs.
//!
//! Responses are opaque JSON; missing or mistyped fields collapse to empty
//! values instead of failing the action. Filters that do not parse are
//! dropped, facet requests that do not parse are rejected.
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result};
use crate::types::Hit;

/// The one result object of a single-result response; the first entry when
/// the client answered with an array anyway.
pub fn single(response: Value) -> Value {
    match response {
        Value::Array(entries) => entries.into_iter().next().unwrap_or(Value::Null),
        other => other,
    }
}

/// Per-index result objects; a lone object counts as a one-entry list.
pub fn entries(response: Value) -> Vec<Value> {
    match response {
        Value::Array(entries) => entries,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

pub fn hits(result: &Value) -> Vec<Hit> {
    match result.get("hits") {
        Some(Value::Array(hits)) => hits.clone(),
        _ => Vec::new(),
    }
}

/// Non-numeric, missing, negative or non-finite counts become 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // `as` saturates
pub fn count(result: &Value) -> u64 {
    let n = number(result.get("count"));
    if n >= 0.0 { n.trunc() as u64 } else { 0 }
}

pub fn elapsed(result: &Value) -> f64 {
    number(result.get("elapsed"))
}

pub fn facets(result: &Value) -> Map<String, Value> {
    match result.get("facets") {
        Some(Value::Object(facets)) => facets.clone(),
        _ => Map::new(),
    }
}

fn number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Parse a JSON-encoded filter. Anything that does not yield a value is
/// logged and treated as "no filter".
pub fn parse_where(raw: Option<&str>) -> Option<Value> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => None,
        Ok(filter) => Some(filter),
        Err(e) => {
            warn!(error = %e, where_conditions = raw, "Failed to parse JSON filter, searching without it");
            None
        }
    }
}

/// Parse a JSON-encoded facet request; the search must not proceed without one.
pub fn parse_facets(raw: Option<&str>) -> Result<Value> {
    let raw = raw.filter(|s| !s.trim().is_empty()).ok_or_else(|| Error::FacetParse("facetsConfig is empty".to_string()))?;
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => Err(Error::FacetParse("facetsConfig is null".to_string())),
        Ok(facets) => Ok(facets),
        Err(e) => {
            warn!(error = %e, facets_config = raw, "Failed to parse JSON facets configuration");
            Err(Error::FacetParse(e.to_string()))
        }
    }
}
