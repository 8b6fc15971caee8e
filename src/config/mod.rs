//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional TOML file (RELAY_CONFIG)
//!     → environment overrides (EXTERNAL_URL, ADDR, ...)
//!     → RelayConfig (immutable)
//!     → shared by value/Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - The upstream target URL is never validated here: a malformed target is
//!   a per-request 500 by contract, not a startup failure

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RelayConfig;
pub use schema::ShutdownConfig;
pub use schema::TimeoutConfig;
pub use schema::UpstreamConfig;
