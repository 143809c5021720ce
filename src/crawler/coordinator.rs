//! Crawl coordination: the ordered-URL loop
//!
//! Drives fetch → extract → persist over the immutable URL list, resuming
//! from the durable `collection_index`. The index is advanced only after a
//! record's row has been appended and the snapshot rewritten, so a crash
//! can duplicate the in-flight record on resume but can never skip one.
//! Any fatal failure aborts the remaining URLs.

use crate::config::Config;
use crate::crawler::diagnostics;
use crate::extract::{build_record, Warnings};
use crate::fetcher::PageFetcher;
use crate::state::{CrawlPhase, CrawlState};
use crate::storage::{SnapshotStore, TabularStore};
use crate::{CourtError, Result};
use chrono::Local;
use scraper::Html;
use std::path::{Path, PathBuf};
use url::Url;

/// Owns every mutable resource of one crawl run: the resume state, the two
/// stores, the warning list, and the fetcher. Nothing here is shared; the
/// run is strictly sequential.
pub struct Coordinator<F> {
    config: Config,
    fetcher: F,
    urls: Vec<String>,
    state: CrawlState,
    state_path: PathBuf,
    table: TabularStore,
    snapshot: SnapshotStore,
    warnings: Warnings,
    phase: CrawlPhase,
    last_body: Option<String>,
}

impl<F: PageFetcher> Coordinator<F> {
    /// Sets up a run: loads the URL list and resume state, opens the
    /// stores. `fresh` discards the previous state and snapshot.
    pub fn new(config: Config, fetcher: F, fresh: bool) -> Result<Self> {
        let urls = load_url_list(Path::new(&config.crawl.urls_path))?;
        let state_path = PathBuf::from(&config.output.state_path);

        let state = if fresh {
            CrawlState::default()
        } else {
            CrawlState::load(&state_path)?
        };
        state.check_bounds(urls.len())?;

        let table = TabularStore::new(
            &config.output.table_path,
            config.crawl.max_phones,
            config.crawl.max_faxes,
        );
        let mut snapshot = SnapshotStore::open(&config.output.snapshot_path)?;
        if fresh {
            snapshot.reset()?;
            state.save(&state_path)?;
        }

        Ok(Self {
            config,
            fetcher,
            urls,
            state,
            state_path,
            table,
            snapshot,
            warnings: Warnings::new(),
            phase: CrawlPhase::Idle,
            last_body: None,
        })
    }

    /// Runs the crawl to completion, then reports accumulated warnings.
    ///
    /// On fatal failure the last fetched page body is dumped for
    /// inspection, warnings are still reported, and the error propagates
    /// so the process exits non-zero.
    pub async fn run(&mut self) -> Result<()> {
        match self.crawl_loop().await {
            Ok(()) => {
                self.phase = CrawlPhase::Done;
                diagnostics::report_warnings(&self.warnings);
                if self.warnings.is_empty() {
                    println!("✔ Ended at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
                }
                Ok(())
            }
            Err(e) => {
                self.phase = CrawlPhase::Aborted;
                tracing::error!(
                    "Crawl aborted at {}: {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    e
                );
                diagnostics::capture_page_dump(
                    Path::new(&self.config.output.error_dump_path),
                    self.last_body.as_deref(),
                );
                diagnostics::report_warnings(&self.warnings);
                Err(e)
            }
        }
    }

    async fn crawl_loop(&mut self) -> Result<()> {
        let total = self.urls.len();

        // A fresh tabular store gets its header exactly once.
        if self.state.collection_index == 0 {
            self.table.write_header()?;
        }

        if self.state.collection_index >= total {
            tracing::info!("Nothing to do: all {} URLs already processed", total);
            return Ok(());
        }

        tracing::info!(
            "Starting with {}. {} courts remaining",
            self.urls[self.state.collection_index],
            total - self.state.collection_index
        );
        tracing::info!(
            "Current date and time: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        while self.state.collection_index < total {
            let index = self.state.collection_index;
            let url = self.urls[index].clone();

            self.phase = CrawlPhase::Fetching;
            tracing::debug!("[{}] {} ({}/{})", self.phase, url, index + 1, total);
            let body = self.fetcher.fetch(&url).await?;
            self.last_body = Some(body);

            self.phase = CrawlPhase::Extracting;
            let record = {
                let doc = Html::parse_document(self.last_body.as_deref().unwrap_or_default());
                build_record(&url, &doc, &mut self.warnings)?
            };

            self.phase = CrawlPhase::Persisting;
            self.table.append(&record)?;
            self.snapshot.store(index, &record)?;

            // The index advance is the last step; everything before it may
            // be repeated after a crash, never skipped.
            self.state.collection_index = index + 1;
            self.state.save(&self.state_path)?;

            tracing::info!(
                "Persisted {} ({} phones, {} faxes) [{}/{}]",
                record.name,
                record.phones.len(),
                record.faxes.len(),
                index + 1,
                total
            );
        }

        tracing::info!("All {} URLs processed", total);
        Ok(())
    }

    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    pub fn collection_index(&self) -> usize {
        self.state.collection_index
    }

    pub fn warnings(&self) -> &Warnings {
        &self.warnings
    }
}

/// Loads the ordered URL list (a JSON array of strings). The list is the
/// source of truth for crawl order and is immutable for the run. Every
/// entry must be an absolute URL.
pub fn load_url_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CourtError::UrlList(format!("cannot read {}: {}", path.display(), e))
    })?;
    let urls: Vec<String> = serde_json::from_str(&content).map_err(|e| {
        CourtError::UrlList(format!("cannot parse {}: {}", path.display(), e))
    })?;
    for url in &urls {
        Url::parse(url)
            .map_err(|e| CourtError::UrlList(format!("invalid URL '{}': {}", url, e)))?;
    }
    Ok(urls)
}
