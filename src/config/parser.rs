use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so diverging output across runs can be traced back to
/// a changed configuration.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const VALID_CONFIG: &str = r#"
[crawl]
urls-path = "urls.json"
max-phones = 8
max-faxes = 3

[fetcher]
user-agent = "court-contacts/0.1 (+https://example.org/about)"
timeout-secs = 20

[output]
table-path = "data/courts.csv"
snapshot-path = "data/courts.json"
state-path = "data/state.json"
error-dump-path = "data/page_error.html"
"#;

    #[test]
    fn test_load_valid_config() {
        let file = create_temp_config(VALID_CONFIG);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawl.urls_path, "urls.json");
        assert_eq!(config.crawl.max_phones, 8);
        assert_eq!(config.crawl.max_faxes, 3);
        assert_eq!(config.fetcher.timeout_secs, 20);
        assert_eq!(config.output.table_path, "data/courts.csv");
    }

    #[test]
    fn test_caps_default_when_omitted() {
        let config_content = r#"
[crawl]
urls-path = "urls.json"

[fetcher]
user-agent = "court-contacts/0.1"

[output]
table-path = "data/courts.csv"
snapshot-path = "data/courts.json"
state-path = "data/state.json"
error-dump-path = "data/page_error.html"
"#;
        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawl.max_phones, 10);
        assert_eq!(config.crawl.max_faxes, 5);
        assert_eq!(config.fetcher.timeout_secs, 30);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawl]
urls-path = "urls.json"
max-phones = 0

[fetcher]
user-agent = "court-contacts/0.1"

[output]
table-path = "data/courts.csv"
snapshot-path = "data/courts.json"
state-path = "data/state.json"
error-dump-path = "data/page_error.html"
"#;
        let file = create_temp_config(config_content);
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_compute_config_hash_is_stable() {
        let file = create_temp_config("test content");
        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");
        assert_ne!(
            compute_config_hash(file1.path()).unwrap(),
            compute_config_hash(file2.path()).unwrap()
        );
    }
}
