//! Court-Contacts: a resumable court directory scraper
//!
//! This crate crawls a fixed, ordered list of court location pages and
//! extracts one normalized contact record per page (name, address, hours,
//! accessibility contacts, phone and fax numbers). Results are persisted
//! incrementally so an interrupted crawl resumes where it left off, losing
//! at most the single in-flight record.

pub mod config;
pub mod crawler;
pub mod dom;
pub mod extract;
pub mod fetcher;
pub mod model;
pub mod state;
pub mod storage;

use thiserror::Error;

/// Main error type for Court-Contacts operations
#[derive(Debug, Error)]
pub enum CourtError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Required field '{field}' not found on {url}")]
    MissingField { field: &'static str, url: String },

    #[error("Invalid selector '{expression}': {message}")]
    Selector { expression: String, message: String },

    #[error("URL list error: {0}")]
    UrlList(String),

    #[error("Crawl state error: {0}")]
    State(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Court-Contacts operations
pub type Result<T> = std::result::Result<T, CourtError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{ContactEntry, CourtRecord};
pub use state::{CrawlPhase, CrawlState};
