//! Mock-server administration subsystem.
//!
//! Test-setup collaborator: drives a WireMock-compatible admin API (health,
//! reset, stub registration). Consumed by the outside-in tests and the
//! `stub-cli` binary; never touched by the request path.

pub mod client;

pub use client::{AdminClient, AdminError, RequestPattern, ResponseDef, StubMapping};
