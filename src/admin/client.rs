//! Client for a WireMock-compatible mock server's administrative API.
//!
//! Used to script the external target during outside-in testing: check the
//! mock server's health, clear its stubs, and register new ones. Any status
//! other than the documented success code is a hard failure carrying the
//! response body.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stub registered with the mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubMapping {
    pub request: RequestPattern,
    pub response: ResponseDef,
}

/// Request matching criteria for a stub.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestPattern {
    pub method: String,

    /// Full URL match (path and query).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Path-only match.
    #[serde(rename = "urlPath", skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
}

/// Response returned when a stub matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseDef {
    pub status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

/// Errors from the administrative API.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("admin request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("mock server unhealthy, status: {0}")]
    Unhealthy(StatusCode),
}

/// Handle on the mock server's administrative API.
pub struct AdminClient {
    http: reqwest::Client,
    admin_url: String,
}

impl AdminClient {
    /// Create a client for the admin API rooted at `admin_url`
    /// (e.g. `http://localhost:8081`).
    pub fn new(admin_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            admin_url: admin_url.into(),
        }
    }

    /// Healthy iff the admin health endpoint answers 200.
    pub async fn health_check(&self) -> Result<(), AdminError> {
        let response = self
            .http
            .get(format!("{}/__admin/health", self.admin_url))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(AdminError::Unhealthy(response.status()));
        }
        Ok(())
    }

    /// Remove all registered stubs.
    pub async fn reset(&self) -> Result<(), AdminError> {
        let response = self
            .http
            .post(format!("{}/__admin/reset", self.admin_url))
            .send()
            .await?;

        expect_status(response, StatusCode::OK).await
    }

    /// Register a stub; the mock server answers 201 on success.
    pub async fn create_stub(&self, stub: &StubMapping) -> Result<(), AdminError> {
        let response = self
            .http
            .post(format!("{}/__admin/mappings", self.admin_url))
            .json(stub)
            .send()
            .await?;

        expect_status(response, StatusCode::CREATED).await
    }
}

async fn expect_status(response: reqwest::Response, expected: StatusCode) -> Result<(), AdminError> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        return Err(AdminError::UnexpectedStatus { status, body });
    }
    Ok(())
}
