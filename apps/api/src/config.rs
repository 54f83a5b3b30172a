use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file overriding the compiled-in reference tables.
    pub reference_tables_path: Option<PathBuf>,
    /// Enables the LLM outreach writer when set.
    pub anthropic_api_key: Option<String>,
    /// Size of the rayon pool used for batch scoring. Defaults to one per core.
    pub scoring_threads: Option<usize>,
    pub outreach_company_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            reference_tables_path: None,
            anthropic_api_key: None,
            scoring_threads: None,
            outreach_company_name: "our company".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: match optional_env("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            reference_tables_path: optional_env("REFERENCE_TABLES_PATH").map(PathBuf::from),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            scoring_threads: optional_env("SCORING_THREADS")
                .map(|n| parse_thread_count(&n))
                .transpose()
                .context("SCORING_THREADS must be a positive integer")?,
            outreach_company_name: optional_env("OUTREACH_COMPANY_NAME")
                .unwrap_or(defaults.outreach_company_name),
        })
    }
}

fn parse_thread_count(value: &str) -> Result<usize> {
    match value.parse::<usize>()? {
        0 => anyhow::bail!("thread count cannot be 0"),
        n => Ok(n),
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
