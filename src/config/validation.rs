use crate::config::types::{Config, CrawlConfig, FetcherConfig, OutputConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.urls_path.is_empty() {
        return Err(ConfigError::Validation(
            "urls-path cannot be empty".to_string(),
        ));
    }

    if config.max_phones < 1 || config.max_phones > 50 {
        return Err(ConfigError::Validation(format!(
            "max-phones must be between 1 and 50, got {}",
            config.max_phones
        )));
    }

    if config.max_faxes < 1 || config.max_faxes > 50 {
        return Err(ConfigError::Validation(format!(
            "max-faxes must be between 1 and 50, got {}",
            config.max_faxes
        )));
    }

    Ok(())
}

fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    let paths = [
        ("table-path", &config.table_path),
        ("snapshot-path", &config.snapshot_path),
        ("state-path", &config.state_path),
        ("error-dump-path", &config.error_dump_path),
    ];

    for (name, path) in &paths {
        if path.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    // The three stores must not clobber each other.
    for i in 0..3 {
        for j in (i + 1)..3 {
            if paths[i].1 == paths[j].1 {
                return Err(ConfigError::Validation(format!(
                    "{} and {} point at the same file: {}",
                    paths[i].0, paths[j].0, paths[i].1
                )));
            }
        }
    }

    Ok(())
}
