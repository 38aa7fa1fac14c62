use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Absent key selects demo mode: deterministic template rendering only.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub config_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| crate::llm_client::DEFAULT_BASE_URL.to_string()),
            config_dir: std::env::var("HR_CONFIG_DIR")
                .unwrap_or_else(|_| "config".to_string())
                .into(),
            templates_dir: std::env::var("HR_TEMPLATES_DIR")
                .unwrap_or_else(|_| "templates".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
