//! Outside-in tests for the relay endpoint.
//!
//! The relay runs as a real server on an ephemeral port; the external target
//! is a wiremock `MockServer`. Covers the three terminal statuses and the
//! exact success template.

use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_hello_success_with_custom_user_agent() {
    let mock_external = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status/204"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_external)
        .await;

    let target = format!("{}/status/204", mock_external.uri());
    let (addr, shutdown) = common::start_relay(common::config_for_target(&target)).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/hello", addr))
        .header("User-Agent", "test-agent")
        .send()
        .await
        .expect("relay unreachable");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        format!("hello test-agent. I called to {} and got code 204\n", target)
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_hello_absent_user_agent_substitutes_empty() {
    let mock_external = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_external)
        .await;

    let target = mock_external.uri();
    let (addr, shutdown) = common::start_relay(common::config_for_target(&target)).await;

    // reqwest sends no User-Agent unless told to.
    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/hello", addr))
        .send()
        .await
        .expect("relay unreachable");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        format!("hello . I called to {} and got code 200\n", target)
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_hello_repeated_calls_yield_identical_bodies() {
    let mock_external = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_external)
        .await;

    let (addr, shutdown) =
        common::start_relay(common::config_for_target(&mock_external.uri())).await;

    let client = reqwest::Client::new();
    let url = format!("http://{}/hello", addr);

    let first = client.get(&url).send().await.unwrap().text().await.unwrap();
    let second = client.get(&url).send().await.unwrap().text().await.unwrap();

    assert_eq!(first, second);

    shutdown.trigger();
}

#[tokio::test]
async fn test_hello_unreachable_target_is_bad_gateway() {
    // Bind-then-drop to obtain a port nothing listens on.
    let dead = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);

    let target = format!("http://{}/status/204", dead_addr);
    let (addr, shutdown) = common::start_relay(common::config_for_target(&target)).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/hello", addr))
        .send()
        .await
        .expect("relay unreachable");

    assert_eq!(response.status(), 502);
    // The body is the surfaced transport error message.
    assert!(!response.text().await.unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn test_hello_invalid_target_is_internal_error() {
    let (addr, shutdown) = common::start_relay(common::config_for_target("://invalid-url")).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/hello", addr))
        .send()
        .await
        .expect("relay unreachable");

    assert_eq!(response.status(), 500);

    shutdown.trigger();
}

#[tokio::test]
async fn test_health_endpoint() {
    let (addr, shutdown) = common::start_relay(common::config_for_target("http://ignored")).await;

    let response = reqwest::get(format!("http://{}/health", addr))
        .await
        .expect("relay unreachable");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");

    shutdown.trigger();
}
