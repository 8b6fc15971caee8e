//! Hello Relay Library

pub mod admin;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod outbound;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
