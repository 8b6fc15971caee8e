//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {var}: {value:?}")]
    Var { var: &'static str, value: String },
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RelayConfig = toml::from_str(&content)?;
    Ok(config)
}

impl RelayConfig {
    /// Build the process configuration: defaults, then the optional TOML file
    /// named by `RELAY_CONFIG`, then environment overrides.
    ///
    /// Unset variables leave the prior value in place. A non-numeric value
    /// for a seconds override is fatal at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match env::var("RELAY_CONFIG") {
            Ok(path) => load_config(Path::new(&path))?,
            Err(_) => RelayConfig::default(),
        };

        if let Ok(url) = env::var("EXTERNAL_URL") {
            config.upstream.target_url = url;
        }
        if let Ok(addr) = env::var("ADDR") {
            config.listener.bind_address = addr;
        }
        if let Ok(raw) = env::var("UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = parse_secs("UPSTREAM_TIMEOUT_SECS", &raw)?;
        }
        if let Ok(raw) = env::var("SHUTDOWN_GRACE_SECS") {
            config.shutdown.grace_secs = parse_secs("SHUTDOWN_GRACE_SECS", &raw)?;
        }
        if let Ok(filter) = env::var("RELAY_LOG") {
            config.observability.log_filter = filter;
        }
        if let Ok(addr) = env::var("METRICS_ADDR") {
            config.observability.metrics_address = Some(addr);
        }

        Ok(config)
    }
}

fn parse_secs(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Var {
        var,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_secs() {
        assert_eq!(parse_secs("UPSTREAM_TIMEOUT_SECS", "30").unwrap(), 30);

        let err = parse_secs("UPSTREAM_TIMEOUT_SECS", "5s").unwrap_err();
        assert!(err.to_string().contains("UPSTREAM_TIMEOUT_SECS"));
        assert!(err.to_string().contains("5s"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/relay.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
