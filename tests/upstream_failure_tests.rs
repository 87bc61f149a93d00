//! Upstream failure demonstrations driven against controlled sockets, so the
//! tests do not depend on real network conditions or DNS behavior.

use std::net::TcpListener;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use httpmock::prelude::*;
use tower::ServiceExt; // for oneshot

use faultbox::http::{create_router, AppState};
use faultbox::upstream::{UpstreamClient, UpstreamConfig};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Grab a local port with no listener behind it. Binding and immediately
/// dropping the listener releases the port, and nothing reclaims it before
/// the test connects.
fn closed_local_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn test_timeout_route_returns_500_when_upstream_stalls() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_secs(5));
        })
        .await;

    let config = UpstreamConfig {
        timeout: Duration::from_millis(100),
        unreachable_url: server.url("/slow"),
        ..UpstreamConfig::default()
    };
    let app = create_router(AppState::new(UpstreamClient::new(config)));

    let response = app.oneshot(get("/error-httpx-timeout")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(value["detail"].is_string());
}

#[tokio::test]
async fn test_connection_refused_route_returns_500() {
    let config = UpstreamConfig {
        refused_url: format!("http://127.0.0.1:{}/", closed_local_port()),
        ..UpstreamConfig::default()
    };
    let app = create_router(AppState::new(UpstreamClient::new(config)));

    let response = app
        .oneshot(get("/error-httpx-connection-refused"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_timeout_route_succeeds_when_upstream_answers_in_time() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fast");
            then.status(200);
        })
        .await;

    let config = UpstreamConfig {
        unreachable_url: server.url("/fast"),
        ..UpstreamConfig::default()
    };
    let app = create_router(AppState::new(UpstreamClient::new(config)));

    let response = app.oneshot(get("/error-httpx-timeout")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
