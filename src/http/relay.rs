//! The relay endpoint.
//!
//! One inbound request maps to exactly one outbound GET against the
//! configured target. The outcome folds into one of three terminal statuses:
//! 500 when the target cannot become a request (no call attempted), 502 when
//! the call fails, 200 with the templated body otherwise.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::observability::metrics;
use crate::outbound::OutboundTransport;

/// Process-wide relay state. Constructed once at startup, read-only after.
#[derive(Clone)]
pub struct AppState {
    pub target_url: Arc<str>,
    pub transport: Arc<dyn OutboundTransport>,
}

/// `GET /hello`: call the configured target once and report the outcome.
pub async fn hello_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    // An unparseable target is a configuration defect, not a transient
    // condition: fail fast, skip the call.
    let request = match Request::builder()
        .method(Method::GET)
        .uri(&*state.target_url)
        .body(())
    {
        Ok(request) => request,
        Err(err) => {
            tracing::error!(target = %state.target_url, error = %err, "Failed to build upstream request");
            metrics::record_relay_request(StatusCode::INTERNAL_SERVER_ERROR);
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    let upstream = match state.transport.execute(request).await {
        Ok(upstream) => upstream,
        Err(err) => {
            tracing::error!(target = %state.target_url, error = %err, "Upstream call failed");
            metrics::record_upstream_failure();
            metrics::record_relay_request(StatusCode::BAD_GATEWAY);
            return (StatusCode::BAD_GATEWAY, err.to_string()).into_response();
        }
    };

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let message = format!(
        "hello {}. I called to {} and got code {}\n",
        user_agent,
        state.target_url,
        upstream.status().as_u16(),
    );

    // The 200 is committed at this point; a teardown failure is logged and
    // otherwise ignored.
    if let Err(err) = upstream.release() {
        tracing::warn!(target = %state.target_url, error = %err, "Failed to release upstream response body");
    }

    metrics::record_relay_request(StatusCode::OK);
    (StatusCode::OK, message).into_response()
}
