//! Hello Relay
//!
//! A minimal HTTP relay built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 HELLO RELAY                   │
//!                      │                                               │
//!   GET /hello         │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!   ──────────────────┼─▶│  http   │───▶│  relay  │───▶│ outbound │──┼──▶ External
//!                      │  │ server  │    │ handler │    │transport │  │    Target
//!   200 / 500 / 502    │  └─────────┘    └─────────┘    └──────────┘  │
//!   ◀──────────────────┼───────┘                                      │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌───────────┐ ┌───────────┐ │ │
//!                      │  │  │ config │ │ observa-  │ │ lifecycle │ │ │
//!                      │  │  │        │ │ bility    │ │           │ │ │
//!                      │  │  └────────┘ └───────────┘ └───────────┘ │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! The companion `stub-cli` binary and the `admin` module drive a
//! WireMock-compatible mock server for outside-in testing.

use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_relay::config::RelayConfig;
use hello_relay::http::HttpServer;
use hello_relay::lifecycle::{shutdown_signal, Shutdown};
use hello_relay::observability::metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RelayConfig::from_env()?;

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.observability.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("hello-relay v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        target_url = %config.upstream.target_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if let Some(metrics_address) = &config.observability.metrics_address {
        match metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Bind TCP listener; a bad address is fatal.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let grace = Duration::from_secs(config.shutdown.grace_secs);
    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config)?;

    let receiver = shutdown.subscribe();
    let mut serve = tokio::spawn(async move { server.run(listener, receiver).await });

    tokio::select! {
        // Listener failure without a signal; nothing to drain.
        result = &mut serve => {
            result??;
            return Ok(());
        }
        _ = shutdown_signal() => {}
    }

    tracing::info!("shutting down server");
    shutdown.trigger();

    // Allow in-flight requests up to the grace period, then terminate
    // unconditionally.
    match tokio::time::timeout(grace, serve).await {
        Ok(result) => result??,
        Err(_) => tracing::warn!(
            grace_secs = grace.as_secs(),
            "Grace period expired with requests in flight, terminating"
        ),
    }

    tracing::info!("server stopped");
    Ok(())
}
