//! Page fetching
//!
//! The crawl needs exactly one capability from the network: navigate to a
//! URL and hand back the document body. That seam is the [`PageFetcher`]
//! trait; the live implementation wraps a configured reqwest client, and
//! tests substitute fixture bodies.

use crate::config::FetcherConfig;
use crate::{CourtError, Result};
use reqwest::Client;
use std::time::Duration;

/// Navigation capability: fetch the body of one page
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Builds the HTTP client used for the whole run
pub fn build_http_client(config: &FetcherConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Live fetcher backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = build_http_client(config).map_err(|source| CourtError::Http {
            url: String::new(),
            source,
        })?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CourtError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CourtError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| CourtError::Http {
            url: url.to_string(),
            source,
        })
    }
}
