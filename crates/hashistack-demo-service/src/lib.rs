//! HashiStack demo HTTP service.
//!
//! # Endpoints
//!
//! - `GET /hello` - Greeting plus raw Consul services and Vault secret
//! - `GET /null-safety-demo` - Optional-value handling demo
//! - `GET /version` - Static version payload
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! Unknown paths answer 404 with an RFC 9457 problem body.

use axum::{Router, routing::get};

use hashistack_demo_service_shared::{AppState, RequestTraceLayer, health_live, health_ready};

pub mod handlers;

/// Build the service router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(handlers::hello))
        .route("/null-safety-demo", get(handlers::null_safety_demo))
        .route("/version", get(handlers::version))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .fallback(handlers::not_found)
        .layer(RequestTraceLayer)
        .with_state(state)
}
