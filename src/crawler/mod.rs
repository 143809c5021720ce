//! Crawler module: loop coordination and failure diagnostics

mod coordinator;
mod diagnostics;

pub use coordinator::{load_url_list, Coordinator};
pub use diagnostics::{capture_page_dump, report_warnings};

use crate::config::Config;
use crate::fetcher::HttpFetcher;
use crate::Result;

/// Runs a complete crawl with the live HTTP fetcher.
///
/// `fresh` discards any saved resume state and starts from the first URL.
pub async fn crawl(config: Config, fresh: bool) -> Result<()> {
    let fetcher = HttpFetcher::new(&config.fetcher)?;
    let mut coordinator = Coordinator::new(config, fetcher, fresh)?;
    coordinator.run().await
}
