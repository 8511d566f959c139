//! Health check handlers for Kubernetes probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" or "not_ready: <reason>".
    pub status: String,

    pub service: String,

    pub version: String,

    /// Whether a Vault token is configured (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_token_configured: Option<bool>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            vault_token_configured: None,
        }
    }

    pub fn ready(service: &str, version: &str, vault_token_configured: bool) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            vault_token_configured: Some(vault_token_configured),
        }
    }
}

/// Liveness probe: 200 whenever the process is serving.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"hashistack-demo-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe. Upstreams are best-effort, so readiness never depends on
/// them; the response only reports whether a Vault token is configured.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::ready(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        state.has_vault_token(),
    );
    (StatusCode::OK, Json(status))
}
