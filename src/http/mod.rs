//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (add request ID)
//!     → relay.rs (one outbound call, outcome → status + body)
//!     → Send to client
//! ```

pub mod relay;
pub mod request;
pub mod server;

pub use relay::{hello_handler, AppState};
pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
