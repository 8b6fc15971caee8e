//! Outbound HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! relay handler builds Request<()>
//!     → OutboundTransport::execute (transport.rs)
//!     → production adapter (client.rs, pooled + timeout-bounded)
//!     → UpstreamResponse { status, scoped body handle }
//!     → handler reads status, releases the body
//! ```
//!
//! # Design Decisions
//! - One-method trait: the relay's logic is testable without sockets
//! - Errors carry human-readable messages; the relay surfaces them verbatim
//!   as the 502 body

pub mod client;
pub mod transport;

pub use client::HttpTransport;
pub use transport::{BodyHandle, OutboundTransport, TransportError, UpstreamResponse};
