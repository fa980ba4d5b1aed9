use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::matching::DEFAULT_TOP_N;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Static job-postings corpus, loaded once at startup.
    pub jobs_csv: PathBuf,
    pub upload_dir: PathBuf,
    pub data_dir: PathBuf,
    pub top_n: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            jobs_csv: std::env::var("JOBS_CSV")
                .unwrap_or_else(|_| "extracted_data/jobs_df.csv".to_string())
                .into(),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "extracted_data".to_string())
                .into(),
            top_n: std::env::var("TOP_N")
                .map(|v| v.parse::<usize>())
                .unwrap_or(Ok(DEFAULT_TOP_N))
                .context("TOP_N must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
