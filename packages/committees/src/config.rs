use anyhow::{Context, Result};
use congress_client::CongressClient;
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub congress_api_key: String,
    pub congress_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            congress_api_key: env::var("CONGRESS_API_KEY")
                .context("CONGRESS_API_KEY must be set")?,
            congress_api_url: env::var("CONGRESS_API_URL").ok(),
        })
    }

    /// Build a committee service client from this configuration.
    pub fn congress_client(&self) -> Result<CongressClient> {
        let client = CongressClient::new(self.congress_api_key.clone())
            .context("Failed to create HTTP client")?;

        Ok(match &self.congress_api_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        })
    }
}
