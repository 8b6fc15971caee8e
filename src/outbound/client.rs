//! Production outbound transport.
//!
//! Wraps a pooled `reqwest` client bounded by a fixed per-call timeout. No
//! automatic retries, no redirect policy changes, no pool tuning beyond
//! runtime defaults.

use std::time::Duration;

use async_trait::async_trait;
use axum::http::Request;
use url::Url;

use crate::outbound::transport::{BodyHandle, OutboundTransport, TransportError, UpstreamResponse};

/// Outbound HTTP transport backed by a pooled client.
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Build the transport. Fails only if the underlying client cannot be
    /// constructed (TLS backend initialization).
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl OutboundTransport for HttpTransport {
    async fn execute(&self, request: Request<()>) -> Result<UpstreamResponse, TransportError> {
        let (parts, ()) = request.into_parts();

        // `http::Uri` admits relative references; the client needs an
        // absolute URL. The narrowing failure is an execution failure, same
        // as an unsupported scheme.
        let url: Url = parts.uri.to_string().parse()?;

        match self
            .client
            .execute(reqwest::Request::new(parts.method, url))
            .await
        {
            Ok(response) => Ok(UpstreamResponse::new(
                response.status(),
                Box::new(PooledBody(response)),
            )),
            Err(err) if err.is_timeout() => Err(TransportError::Timeout(self.timeout)),
            Err(err) => Err(TransportError::Upstream(err)),
        }
    }
}

/// Body of a pooled upstream response. Dropping it hands the connection back
/// to the pool, or tears it down if the body was never drained.
struct PooledBody(#[allow(dead_code)] reqwest::Response);

impl BodyHandle for PooledBody {
    fn release(self: Box<Self>) -> Result<(), TransportError> {
        drop(self);
        Ok(())
    }
}
