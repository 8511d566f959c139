//! Shared infrastructure for the HashiStack demo HTTP service.
//!
//! - [`AppState`]: upstream client, endpoints, and Vault token shared by handlers
//! - [`ServiceConfig`]: startup configuration from the environment
//! - [`EnvSource`]: per-request environment lookups (`DB_USER`, `DB_PASS`)
//! - [`health`]: liveness and readiness probes
//! - [`ProblemDetails`]: RFC 9457 error bodies
//! - [`logging`]: structured logging setup
//! - [`middleware`]: request-id propagation and request logging
//!
//! # Architecture
//!
//! Handlers stay thin; everything that is not HTTP glue lives in
//! `hashistack-demo-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Extract query / state                                    │
//! │  - Call hashistack-demo-lib helpers and UpstreamClient      │
//! │  - Shape the JSON response                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! Enable the `test-utils` feature to use [`test_utils`] from dependent
//! crates.

#![deny(warnings)]

pub mod config;
pub mod env;
mod health;
pub mod logging;
pub mod middleware;
mod problem;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ServiceConfig, UpstreamEndpoints, CONSUL_SERVICES_URL, VAULT_SECRET_URL};
pub use env::{EnvSource, ProcessEnv, StaticEnv};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId, RequestTraceLayer};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_MISSING_FIELD, PROBLEM_NOT_FOUND,
};
pub use state::{AppState, AppStateError};
