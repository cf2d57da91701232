//! Client configuration loaded from `<config_dir>/stacks/config.toml`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Directory name for stacks config within the platform config dir.
const CONFIG_DIR: &str = "stacks";

/// Filename for the config file.
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding `base_url`.
pub const ENV_API_URL: &str = "STACKS_API_URL";

/// Environment variable overriding `timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "STACKS_TIMEOUT_SECS";

/// Path segment the stacks API currently serves under. The misspelling is
/// the server's contract.
pub const DEFAULT_REPOSITORIES_SEGMENT: &str = "respositories";

/// Settings for talking to the stacks API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StacksConfig {
    /// Base URL of the web application (scheme + host, optional path prefix)
    pub base_url: String,
    /// Path segment between `/api/` and the repository id
    pub repositories_segment: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for StacksConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            repositories_segment: DEFAULT_REPOSITORIES_SEGMENT.to_string(),
            timeout_secs: 30,
            user_agent: "stacks-client".to_string(),
        }
    }
}

impl StacksConfig {
    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|e| {
                Error::Config(format!("{ENV_TIMEOUT_SECS}={raw:?} is not a number: {e}"))
            })?;
        }

        Ok(())
    }

    /// Parse and check the base URL.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base_url {:?}: {e}", self.base_url)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "base_url must be http or https, got {other}"
            ))),
        }
    }

    /// Request timeout as a `Duration`
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from disk.
///
/// Returns defaults if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<StacksConfig> {
    if !path.exists() {
        return Ok(StacksConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: StacksConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, StacksConfig::default());
        assert_eq!(config.repositories_segment, "respositories");
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "base_url = \"https://app.example.com\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.base_url, "https://app.example.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.repositories_segment, DEFAULT_REPOSITORIES_SEGMENT);
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
base_url = "https://app.example.com/prefix/"
repositories_segment = "repositories"
timeout_secs = 5
user_agent = "custom"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.repositories_segment, "repositories");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent, "custom");
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        match load_config(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("failed to parse")),
            other => panic!("Expected Config error, got: {other:?}"),
        }
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = StacksConfig {
            base_url: "https://from-file.example.com".to_string(),
            ..StacksConfig::default()
        };
        config
            .apply_env_with(env(&[
                (ENV_API_URL, "https://from-env.example.com"),
                (ENV_TIMEOUT_SECS, "12"),
            ]))
            .unwrap();

        assert_eq!(config.base_url, "https://from-env.example.com");
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn test_blank_env_url_ignored() {
        let mut config = StacksConfig::default();
        config.apply_env_with(env(&[(ENV_API_URL, "  ")])).unwrap();
        assert_eq!(config.base_url, StacksConfig::default().base_url);
    }

    #[test]
    fn test_bad_env_timeout_errors() {
        let mut config = StacksConfig::default();
        let result = config.apply_env_with(env(&[(ENV_TIMEOUT_SECS, "later")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_base_url_rejects_non_http_scheme() {
        let config = StacksConfig {
            base_url: "ftp://example.com".to_string(),
            ..StacksConfig::default()
        };
        assert!(matches!(config.base_url(), Err(Error::Config(_))));
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        let config = StacksConfig {
            base_url: "not a url".to_string(),
            ..StacksConfig::default()
        };
        assert!(config.base_url().is_err());
    }
}
