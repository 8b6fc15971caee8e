//! Shared utilities for integration testing.

use std::net::SocketAddr;

use hello_relay::config::RelayConfig;
use hello_relay::http::HttpServer;
use hello_relay::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Spawn the relay on an ephemeral port, returning its address and the
/// shutdown handle that stops it.
#[allow(dead_code)]
pub async fn start_relay(config: RelayConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config).unwrap();
    let receiver = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    (addr, shutdown)
}

/// Relay config pointing at the given target, with a short upstream timeout
/// for test stability.
#[allow(dead_code)]
pub fn config_for_target(target: &str) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.upstream.target_url = target.to_string();
    config.upstream.timeout_secs = 2;
    config
}
