//! Pure Congress committee API client.
//!
//! A minimal client for the committees endpoint of the Congress API. Supports
//! listing the committees of a chamber and the committees a legislator sits on.
//!
//! # Example
//!
//! ```rust,ignore
//! use congress_client::{Chamber, CongressClient};
//!
//! let client = CongressClient::from_env()?;
//!
//! let committees = client.committees_for_chamber(Chamber::Senate).await?;
//! for committee in &committees {
//!     println!("{} {}", committee.id, committee.name);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{CongressError, Result};
pub use types::{Chamber, Committee, Legislator, ResultsPage};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://congress.api.sunlightfoundation.com";

const API_KEY_HEADER: &str = "X-APIKEY";

#[derive(Clone)]
pub struct CongressClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CongressClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from environment variable `CONGRESS_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("CONGRESS_API_KEY")
            .map_err(|_| CongressError::Config("CONGRESS_API_KEY not set".into()))?;
        Self::new(api_key)
    }

    /// Point the client at another host (mirrors, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Top-level committees of a chamber, in service order.
    pub async fn committees_for_chamber(&self, chamber: Chamber) -> Result<Vec<Committee>> {
        self.get_results(
            "committees",
            &[
                ("chamber", chamber.as_str()),
                ("subcommittee", "false"),
                ("per_page", "all"),
            ],
        )
        .await
    }

    /// Committees and subcommittees a legislator is a member of, in service order.
    pub async fn committees_for_legislator(&self, bioguide_id: &str) -> Result<Vec<Committee>> {
        self.get_results(
            "committees",
            &[("member_ids", bioguide_id), ("per_page", "all")],
        )
        .await
    }

    async fn get_results<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, ?query, "Congress API request");

        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CongressError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CongressError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.bytes().await?;
        let page: ResultsPage<T> = serde_json::from_slice(&body)?;
        tracing::debug!(count = page.results.len(), "Congress API results");
        Ok(page.results)
    }
}
