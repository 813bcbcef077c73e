//! Named index credentials, validated once at registration and read-only
//! afterwards.
use std::collections::HashMap;

use orama_core::types::{IndexConfig, IndexSummary};
use orama_core::{Error, Result};

#[derive(Debug, Clone)]
pub struct IndexRegistry {
    indexes: Vec<IndexConfig>,
    by_name: HashMap<String, usize>,
}

impl IndexRegistry {
    /// Build the registry, reporting the first violated constraint.
    ///
    /// The list must be non-empty, every entry needs a non-blank `name`,
    /// `endpoint` and `api_key`, and names must be unique.
    pub fn validate(configs: Vec<IndexConfig>) -> Result<Self> {
        if configs.is_empty() {
            return Err(Error::Configuration("at least one index must be configured".to_string()));
        }
        let mut by_name = HashMap::with_capacity(configs.len());
        for (position, config) in configs.iter().enumerate() {
            let label = if config.name.trim().is_empty() {
                format!("index #{}", position + 1)
            } else {
                format!("index #{} ({})", position + 1, config.name)
            };
            for (field, value) in [("name", &config.name), ("endpoint", &config.endpoint), ("api_key", &config.api_key)] {
                if value.trim().is_empty() {
                    return Err(Error::Configuration(format!("{label} is missing `{field}`")));
                }
            }
            if by_name.insert(config.name.clone(), position).is_some() {
                return Err(Error::Configuration(format!("duplicate index name `{}`", config.name)));
            }
        }
        Ok(Self { indexes: configs, by_name })
    }

    pub fn resolve(&self, name: &str) -> Result<&IndexConfig> {
        self.by_name
            .get(name)
            .map(|&position| &self.indexes[position])
            .ok_or_else(|| Error::IndexNotFound(name.to_string()))
    }

    pub fn summaries(&self) -> Vec<IndexSummary> {
        self.indexes.iter().map(IndexSummary::from).collect()
    }

    pub fn len(&self) -> usize { self.indexes.len() }

    pub fn is_empty(&self) -> bool { self.indexes.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(name: &str) -> IndexConfig {
        IndexConfig::new(name, format!("https://example.test/{name}"), format!("key-{name}"))
    }

    #[test]
    fn unique_complete_entries_validate() {
        let registry = IndexRegistry::validate(vec![index("docs"), index("blog")]).expect("valid");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("blog").expect("blog").api_key, "key-blog");
        let names: Vec<_> = registry.summaries().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["docs", "blog"], "configuration order is kept");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = IndexRegistry::validate(vec![index("docs"), index("blog"), index("docs")]).expect_err("duplicate");
        match err {
            Error::Configuration(msg) => assert!(msg.contains("duplicate index name `docs`"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(IndexRegistry::validate(vec![]), Err(Error::Configuration(_))));
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut broken = index("blog");
        broken.endpoint = "  ".to_string();
        broken.api_key = String::new();
        let err = IndexRegistry::validate(vec![index("docs"), broken]).expect_err("missing endpoint");
        assert_eq!(err.to_string(), "Invalid configuration: index #2 (blog) is missing `endpoint`");

        let nameless = IndexConfig::new("", "https://example.test", "key");
        let err = IndexRegistry::validate(vec![nameless]).expect_err("missing name");
        assert_eq!(err.to_string(), "Invalid configuration: index #1 is missing `name`");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = IndexRegistry::validate(vec![index("docs")]).expect("valid");
        match registry.resolve("missing") {
            Err(Error::IndexNotFound(name)) => assert_eq!(name, "missing"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
