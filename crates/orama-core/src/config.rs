//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Nested keys are split on `__` (e.g. `APP_CLIENT__REQUEST_TIMEOUT_MS`).
//! `${VAR}` references inside index endpoints and keys are expanded after
//! extraction so secrets can stay in the environment.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::IndexConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub indexes: Vec<IndexConfig>,
    #[serde(default)]
    pub client: ClientSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientSettings {
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
            user_agent: concat!("orama-actions/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        Self::extract(figment.merge(Env::prefixed("APP_").split("__")))
    }

    /// Load one explicit TOML file, still layered under `APP_*` env vars.
    pub fn from_file<S: AsRef<str>>(path: S) -> Result<Self> {
        let path = expand_path(path);
        if !path.is_file() {
            return Err(Error::Configuration(format!("config file not found: {}", path.display())));
        }
        Self::extract(Figment::new().merge(Toml::file(&path)).merge(Env::prefixed("APP_").split("__")))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let mut settings: Self = figment.extract().map_err(|e| Error::Configuration(e.to_string()))?;
        for index in &mut settings.indexes {
            index.endpoint = expand_value(&index.endpoint)?;
            index.api_key = expand_value(&index.api_key)?;
        }
        Ok(settings)
    }
}

fn expand_value(raw: &str) -> Result<String> {
    shellexpand::env(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| Error::Configuration(e.to_string()))
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    const TWO_INDEXES: &str = r#"
        [[indexes]]
        name = "docs"
        endpoint = "https://cloud.orama.run/v1/indexes/docs-abc"
        api_key = "key-docs"

        [[indexes]]
        name = "blog"
        endpoint = "https://cloud.orama.run/v1/indexes/blog-def"
        api_key = "${BLOG_KEY}"
    "#;

    #[test]
    fn load_merges_env_file_and_expands_secrets() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", TWO_INDEXES)?;
            jail.create_file("config.test.toml", "[client]\nrequest_timeout_ms = 1000\n")?;
            jail.set_env("BLOG_KEY", "key-blog");

            let settings = Settings::load_for_env("test").map_err(|e| e.to_string())?;
            assert_eq!(settings.indexes.len(), 2);
            assert_eq!(settings.indexes[0].name, "docs");
            assert_eq!(settings.indexes[1].api_key, "key-blog");
            assert_eq!(settings.client.request_timeout_ms, 1000);
            assert_eq!(settings.client.connect_timeout_ms, 5_000);
            Ok(())
        });
    }

    #[test]
    fn app_env_overrides_nested_client_settings() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", TWO_INDEXES)?;
            jail.set_env("BLOG_KEY", "key-blog");
            jail.set_env("APP_CLIENT__CONNECT_TIMEOUT_MS", "250");

            let settings = Settings::load_for_env("prod").map_err(|e| e.to_string())?;
            assert_eq!(settings.client.connect_timeout_ms, 250);
            Ok(())
        });
    }

    #[test]
    fn unresolved_secret_reference_is_a_configuration_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", TWO_INDEXES)?;

            let err = Settings::load_for_env("dev").expect_err("BLOG_KEY is unset");
            assert!(matches!(err, Error::Configuration(_)));
            Ok(())
        });
    }

    #[test]
    fn missing_indexes_key_yields_empty_list() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[client]\nuser_agent = \"test\"\n")?;

            let settings = Settings::load_for_env("dev").map_err(|e| e.to_string())?;
            assert!(settings.indexes.is_empty());
            assert_eq!(settings.client.user_agent, "test");
            Ok(())
        });
    }

    #[test]
    fn from_file_rejects_missing_path() {
        let err = Settings::from_file("/definitely/not/here/orama.toml").expect_err("missing file");
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn resolve_with_base_keeps_absolute_paths() {
        let base = Path::new("/srv/orama");
        assert_eq!(resolve_with_base(base, "/etc/orama.toml"), PathBuf::from("/etc/orama.toml"));
        assert_eq!(resolve_with_base(base, "orama.toml"), PathBuf::from("/srv/orama/orama.toml"));
    }
}
