use serde_json::json;
use std::fs;
use tempfile::TempDir;

use orama_core::config::Settings;
use orama_core::types::{
    IndexConfig, IndexSummary, MultiIndexSearchResult, SearchMode, SearchParams, SortBy, SortOrder,
};

#[test]
fn search_params_omit_absent_options() {
    let params = SearchParams::new("");
    let encoded = serde_json::to_value(&params).expect("serialize");
    assert_eq!(encoded, json!({"term": ""}), "only the term is always present");
}

#[test]
fn search_params_wire_names() {
    let mut params = SearchParams::new("shoes")
        .with_mode(Some(SearchMode::Hybrid))
        .with_limit(Some(0))
        .with_filter(Some(json!({"price": {"lt": 100}})));
    params.properties = Some(vec!["title".to_string()]);
    params.sort_by = Some(SortBy { property: "price".to_string(), order: SortOrder::Desc });

    let encoded = serde_json::to_value(&params).expect("serialize");
    assert_eq!(
        encoded,
        json!({
            "term": "shoes",
            "mode": "hybrid",
            "properties": ["title"],
            "limit": 0,
            "where": {"price": {"lt": 100}},
            "sortBy": {"property": "price", "order": "desc"}
        })
    );
}

#[test]
fn search_mode_parses_case_insensitively() {
    assert_eq!("Vector".parse::<SearchMode>(), Ok(SearchMode::Vector));
    assert_eq!("fulltext".parse::<SearchMode>(), Ok(SearchMode::Fulltext));
    assert!("semantic".parse::<SearchMode>().is_err());
    assert_eq!(SearchMode::default(), SearchMode::Fulltext);
}

#[test]
fn index_config_debug_hides_key() {
    let config = IndexConfig::new("docs", "https://example.test/docs", "super-secret");
    let debug = format!("{config:?}");
    assert!(debug.contains("has_api_key: true"));
    assert!(!debug.contains("super-secret"));
    assert!(!format!("{:?}", config.connection()).contains("super-secret"));

    let summary = IndexSummary::from(&config);
    assert_eq!(serde_json::to_value(summary).expect("serialize"), json!({"name": "docs", "endpoint": "https://example.test/docs"}));
}

#[test]
fn unmerged_multi_result_omits_merged_hits() {
    let result = MultiIndexSearchResult { results: vec![], merged_hits: None, total_count: 0 };
    assert_eq!(serde_json::to_value(result).expect("serialize"), json!({"results": [], "totalCount": 0}));
}

#[test]
fn settings_from_explicit_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("orama.toml");
    fs::write(
        &path,
        r#"
[[indexes]]
name = "docs"
endpoint = "https://example.test/docs"
api_key = "key-docs"

[client]
request_timeout_ms = 1500
"#,
    )
    .unwrap();

    let settings = Settings::from_file(path.to_string_lossy()).expect("load");
    assert_eq!(settings.indexes, vec![IndexConfig::new("docs", "https://example.test/docs", "key-docs")]);
    assert_eq!(settings.client.request_timeout_ms, 1500);
    assert_eq!(settings.client.connect_timeout_ms, 5_000, "unset fields keep defaults");
}

#[test]
fn incomplete_index_entries_still_load() {
    // Field checks belong to registry validation, not to loading.
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("orama.toml");
    fs::write(&path, "[[indexes]]\nname = \"docs\"\n").unwrap();

    let settings = Settings::from_file(path.to_string_lossy()).expect("load");
    assert_eq!(settings.indexes[0].endpoint, "");
    assert_eq!(settings.indexes[0].api_key, "");
}
