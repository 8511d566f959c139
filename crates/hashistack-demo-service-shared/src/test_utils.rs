//! Test utilities for handler testing.
//!
//! Provides a local stand-in for the Consul and Vault agents that records the
//! headers it receives, endpoints that are guaranteed to refuse connections,
//! and a helper to assemble an [`AppState`] from them.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Router,
};
use hashistack_demo_lib::UpstreamClient;

use crate::config::{ServiceConfig, UpstreamEndpoints};
use crate::env::StaticEnv;
use crate::state::AppState;

/// Token configured in states built by [`test_state`].
pub const TEST_VAULT_TOKEN: &str = "test-token";

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<HeaderMap>>>,
}

/// A local HTTP server answering every GET with a fixed status and body.
pub struct MockUpstream {
    base_url: String,
    seen: Arc<Mutex<Vec<HeaderMap>>>,
}

impl MockUpstream {
    /// Start a server on an ephemeral port that answers 200 with `body`.
    pub async fn start(body: impl Into<String>) -> Self {
        Self::start_with_status(StatusCode::OK, body).await
    }

    /// Start a server on an ephemeral port that answers `status` with `body`.
    pub async fn start_with_status(status: StatusCode, body: impl Into<String>) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.into(),
            seen: Arc::clone(&seen),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            seen,
        }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Headers of every request received so far, oldest first.
    pub fn received_headers(&self) -> Vec<HeaderMap> {
        self.seen.lock().expect("mock upstream lock").clone()
    }
}

async fn record(State(state): State<MockState>, headers: HeaderMap) -> (StatusCode, String) {
    state.seen.lock().expect("mock upstream lock").push(headers);
    (state.status, state.body.clone())
}

/// Endpoints pointing at local ports nothing listens on.
pub async fn unreachable_endpoints() -> UpstreamEndpoints {
    UpstreamEndpoints {
        consul_services: format!("{}/v1/agent/services", closed_port_base().await),
        vault_secret: format!("{}/v1/secret/data/myapp", closed_port_base().await),
    }
}

async fn closed_port_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

/// Build an [`AppState`] using `endpoints`, `env`, and [`TEST_VAULT_TOKEN`].
pub fn test_state(endpoints: UpstreamEndpoints, env: StaticEnv) -> AppState {
    let config = ServiceConfig {
        vault_token: TEST_VAULT_TOKEN.to_string(),
        upstream_timeout: Duration::from_secs(2),
        endpoints,
        ..ServiceConfig::default()
    };
    let client = UpstreamClient::new(config.upstream_timeout).expect("build test client");
    AppState::from_components(client, &config, Arc::new(env))
}
