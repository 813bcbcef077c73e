use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use orama_actions::Integration;
use orama_client::HttpSearchClient;
use orama_core::config::{resolve_with_base, Settings};

#[derive(Parser, Debug)]
#[command(name = "orama")]
#[command(version, about = "Run Orama search actions against the configured indexes")]
struct Cli {
    #[arg(short, long, global = true, help = "Config file (default: config.toml + config.<RUST_ENV>.toml)")]
    config: Option<String>,

    #[arg(long, global = true, help = "Pretty-print the JSON output")]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "List configured indexes (name and endpoint)")]
    ListIndexes,

    #[command(about = "Full-text, vector or hybrid search on one index")]
    Search {
        #[arg(default_value = "-", help = "Action input as JSON, or '-' to read stdin")]
        input: String,
    },

    #[command(about = "Vector search on one index")]
    VectorSearch {
        #[arg(default_value = "-", help = "Action input as JSON, or '-' to read stdin")]
        input: String,
    },

    #[command(about = "Search one index and return facet counts")]
    SearchWithFacets {
        #[arg(default_value = "-", help = "Action input as JSON, or '-' to read stdin")]
        input: String,
    },

    #[command(about = "Search several indexes, merged or per index")]
    MultiIndexSearch {
        #[arg(default_value = "-", help = "Action input as JSON, or '-' to read stdin")]
        input: String,
    },
}

fn read_input<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let text = if raw == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("failed to read action input from stdin")?;
        buf
    } else {
        raw.to_string()
    };
    serde_json::from_str(&text).context("invalid action input JSON")
}

fn load_settings(path: Option<&str>) -> Result<Settings> {
    let settings = match path {
        Some(path) => {
            let path = resolve_with_base(&std::env::current_dir()?, path);
            Settings::from_file(path.to_string_lossy())?
        }
        None => Settings::load()?,
    };
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the action output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orama=info,orama_actions=info,orama_client=warn")),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref()).context("failed to load configuration")?;
    let client = HttpSearchClient::from_settings(&settings.client)?;
    let integration = Integration::register(settings.indexes, Arc::new(client)).context("integration registration failed")?;

    info!(command = ?cli.command, "Running action");
    let output: Value = match cli.command {
        Commands::ListIndexes => serde_json::to_value(integration.list_indexes())?,
        Commands::Search { input } => serde_json::to_value(integration.search(read_input(&input)?).await?)?,
        Commands::VectorSearch { input } => serde_json::to_value(integration.vector_search(read_input(&input)?).await?)?,
        Commands::SearchWithFacets { input } => {
            serde_json::to_value(integration.search_with_facets(read_input(&input)?).await?)?
        }
        Commands::MultiIndexSearch { input } => {
            serde_json::to_value(integration.multi_index_search(read_input(&input)?).await?)?
        }
    };

    let rendered = if cli.pretty { serde_json::to_string_pretty(&output)? } else { serde_json::to_string(&output)? };
    println!("{rendered}");
    integration.unregister();
    Ok(())
}
