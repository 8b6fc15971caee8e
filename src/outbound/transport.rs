//! The outbound transport seam.
//!
//! # Responsibilities
//! - Define the one-operation capability boundary over outbound HTTP
//! - Carry upstream outcomes (status + scoped body handle) back to the relay
//!
//! # Design Decisions
//! - `execute` is the only operation; retries and fan-out exist nowhere
//! - The body handle releases on drop; explicit `release` exists so teardown
//!   failures can be logged instead of silently swallowed

use std::time::Duration;

use async_trait::async_trait;
use axum::http::{Request, StatusCode};
use thiserror::Error;

/// Errors surfaced by an outbound transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The target did not narrow to an absolute, fetchable URL.
    #[error("invalid upstream target: {0}")]
    Target(#[from] url::ParseError),

    /// The per-call deadline elapsed before the upstream answered.
    #[error("upstream request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The call could not be completed (connect, DNS, protocol).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Releasing the upstream response body failed.
    #[error("failed to release upstream body: {0}")]
    Release(String),
}

/// One-shot outbound HTTP capability.
///
/// Exactly one production implementation exists ([`HttpTransport`]); tests
/// substitute scripted stand-ins through the same seam.
///
/// [`HttpTransport`]: crate::outbound::HttpTransport
#[async_trait]
pub trait OutboundTransport: Send + Sync {
    /// Perform the request, returning the upstream response or the failure
    /// that prevented it. Implementations issue at most one network call.
    async fn execute(&self, request: Request<()>) -> Result<UpstreamResponse, TransportError>;
}

/// Scoped handle on an upstream response body.
///
/// Dropping the handle releases the underlying connection on every exit
/// path; `release` additionally surfaces teardown failures that a plain drop
/// would swallow.
pub trait BodyHandle: Send {
    fn release(self: Box<Self>) -> Result<(), TransportError>;
}

/// Status and body of a completed upstream call.
pub struct UpstreamResponse {
    status: StatusCode,
    body: Box<dyn BodyHandle>,
}

impl UpstreamResponse {
    pub fn new(status: StatusCode, body: Box<dyn BodyHandle>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Release the body, surfacing teardown failures.
    pub fn release(self) -> Result<(), TransportError> {
        self.body.release()
    }
}
