use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub fetcher: FetcherConfig,
    pub output: OutputConfig,
}

/// Crawl input and tabular schema configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Path to the JSON array of page URLs (the crawl order)
    #[serde(rename = "urls-path")]
    pub urls_path: String,

    /// Number of phone slots in each tabular row
    #[serde(rename = "max-phones", default = "default_max_phones")]
    pub max_phones: usize,

    /// Number of fax slots in each tabular row
    #[serde(rename = "max-faxes", default = "default_max_faxes")]
    pub max_faxes: usize,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Output file locations
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the fixed-width tabular store
    #[serde(rename = "table-path")]
    pub table_path: String,

    /// Path to the JSON array snapshot
    #[serde(rename = "snapshot-path")]
    pub snapshot_path: String,

    /// Path to the resume-state file
    #[serde(rename = "state-path")]
    pub state_path: String,

    /// Where the last fetched page body is dumped on fatal failure
    #[serde(rename = "error-dump-path")]
    pub error_dump_path: String,
}

fn default_max_phones() -> usize {
    10
}

fn default_max_faxes() -> usize {
    5
}

fn default_timeout_secs() -> u64 {
    30
}
