use std::time::Duration;

use axum::{http::HeaderMap, http::StatusCode, routing::get, Router};
use hashistack_demo_lib::{UpstreamClient, UpstreamError};

const VAULT_BODY: &str = r#"{"data":{"data":{"k":"v"}}}"#;

/// Serve a small upstream stand-in on an ephemeral local port.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/v1/secret/data/myapp", get(|| async { VAULT_BODY }))
        .route(
            "/echo-token",
            get(|headers: HeaderMap| async move {
                headers
                    .get("x-vault-token")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("<none>")
                    .to_string()
            }),
        )
        .route("/forbidden", get(|| async { StatusCode::FORBIDDEN }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// An address nothing is listening on.
async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1/agent/services")
}

fn client() -> UpstreamClient {
    UpstreamClient::new(Duration::from_secs(2)).expect("client builds")
}

#[tokio::test]
async fn get_returns_raw_body() {
    let base = spawn_upstream().await;
    let body = client()
        .get(&format!("{base}/v1/secret/data/myapp"), &[])
        .await
        .unwrap();
    assert_eq!(body, VAULT_BODY);
}

#[tokio::test]
async fn get_sends_supplied_headers() {
    let base = spawn_upstream().await;
    let body = client()
        .get(&format!("{base}/echo-token"), &[("X-Vault-Token", "s.token")])
        .await
        .unwrap();
    assert_eq!(body, "s.token");
}

#[tokio::test]
async fn get_without_headers_sends_none() {
    let base = spawn_upstream().await;
    let body = client().get(&format!("{base}/echo-token"), &[]).await.unwrap();
    assert_eq!(body, "<none>");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let base = spawn_upstream().await;
    let err = client()
        .get(&format!("{base}/forbidden"), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Request(_)));
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn unreachable_host_is_an_error() {
    let url = closed_port_url().await;
    let err = client().get(&url, &[]).await.unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let base = spawn_upstream().await;
    let client = UpstreamClient::new(Duration::from_millis(200)).unwrap();
    let err = client.get(&format!("{base}/slow"), &[]).await.unwrap_err();
    match err {
        UpstreamError::Request(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_url_is_an_error() {
    let err = client().get("not a url", &[]).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Request(_)));
}

#[tokio::test]
async fn invalid_header_value_is_an_error() {
    let base = spawn_upstream().await;
    let err = client()
        .get(&format!("{base}/echo-token"), &[("X-Vault-Token", "bad\r\nvalue")])
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::InvalidHeader { .. }));
}
