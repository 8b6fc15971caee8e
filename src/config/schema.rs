//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal (or absent) config is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Outbound upstream call settings.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Graceful shutdown settings.
    pub shutdown: ShutdownConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream call configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Target URL called once per relay request.
    ///
    /// Not validated at load time: an unparseable target surfaces per request
    /// as a 500, never as a startup failure.
    pub target_url: String,

    /// Per-call timeout in seconds. No retries.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            target_url: "https://httpbin.org/status/204".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds. Must exceed the upstream timeout so
    /// the handler, not the middleware, decides the terminal status.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Address for the Prometheus exporter. Exposition is disabled when
    /// unset; counters stay cheap no-ops.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "hello_relay=debug,tower_http=debug".to_string(),
            metrics_address: None,
        }
    }
}

/// Graceful shutdown settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// How long in-flight requests may run after the termination signal
    /// before the process exits unconditionally.
    pub grace_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { grace_secs: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.upstream.target_url, "https://httpbin.org/status/204");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.shutdown.grace_secs, 5);
        assert!(config.observability.metrics_address.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: RelayConfig = toml::from_str(
            r#"
            [upstream]
            target_url = "http://localhost:8081/status/204"
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.target_url, "http://localhost:8081/status/204");
        // Unspecified sections keep their defaults.
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_malformed_target_is_accepted() {
        // The 500-per-request policy depends on a bad target reaching the
        // running configuration, so parsing must not reject it.
        let config: RelayConfig = toml::from_str(
            r#"
            [upstream]
            target_url = "://invalid-url"
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.target_url, "://invalid-url");
    }
}
