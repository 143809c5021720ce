//! Configuration module
//!
//! Loads, parses, and validates the TOML configuration file.
//!
//! # Example
//!
//! ```no_run
//! use court_contacts::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling {} with up to {} phone slots", config.crawl.urls_path, config.crawl.max_phones);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, CrawlConfig, FetcherConfig, OutputConfig};
pub use validation::validate;
