//! Court-Contacts main entry point
//!
//! Command-line interface for the resumable court directory scraper.

use clap::Parser;
use court_contacts::config::{load_config_with_hash, Config};
use court_contacts::crawler::{crawl, load_url_list};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Court-Contacts: a resumable court directory scraper
///
/// Crawls a fixed, ordered list of court location pages, extracts one
/// contact record per page, and persists results incrementally so an
/// interrupted run resumes where it left off.
#[derive(Parser, Debug)]
#[command(name = "court-contacts")]
#[command(version = "0.1.0")]
#[command(about = "A resumable court directory scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Resume an interrupted crawl (default behavior)
    #[arg(long, conflicts_with = "fresh")]
    resume: bool,

    /// Start a fresh crawl, discarding previous state and snapshot
    #[arg(long, conflicts_with = "resume")]
    fresh: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if cli.resume {
        tracing::debug!("--resume given; resuming is the default behavior");
    }

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        crawl(config, cli.fresh).await?;
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("court_contacts=info,warn"),
            1 => EnvFilter::new("court_contacts=debug,info"),
            2 => EnvFilter::new("court_contacts=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Validates the config, loads the URL list, and reports what a real run
/// would do.
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Court-Contacts Dry Run ===\n");

    let urls = load_url_list(Path::new(&config.crawl.urls_path))?;
    let state = court_contacts::CrawlState::load(Path::new(&config.output.state_path))?;

    println!("Crawl:");
    println!("  URL list: {} ({} URLs)", config.crawl.urls_path, urls.len());
    println!("  Resume index: {}", state.collection_index);
    println!("  Phone slots per row: {}", config.crawl.max_phones);
    println!("  Fax slots per row: {}", config.crawl.max_faxes);

    println!("\nFetcher:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!("  Timeout: {}s", config.fetcher.timeout_secs);

    println!("\nOutput:");
    println!("  Tabular store: {}", config.output.table_path);
    println!("  JSON snapshot: {}", config.output.snapshot_path);
    println!("  State file: {}", config.output.state_path);
    println!("  Error dump: {}", config.output.error_dump_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would process {} of {} URLs",
        urls.len().saturating_sub(state.collection_index),
        urls.len()
    );

    Ok(())
}
