//! Application state for the HTTP handlers.
//!
//! Holds the shared upstream client, the upstream endpoints, the Vault token
//! read at startup, and the environment source consulted per request.

use std::sync::Arc;

use hashistack_demo_lib::{Error as LibError, UpstreamClient};

use crate::config::{ServiceConfig, UpstreamEndpoints};
use crate::env::{EnvSource, ProcessEnv};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// The shared upstream HTTP client could not be built.
    ClientBuild(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClientBuild(e) => write!(f, "failed to initialise upstream client: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClientBuild(e) => Some(e),
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::ClientBuild(err)
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` inside) and read-only after construction; share
/// it through axum's `State` extractor.
///
/// # Example
///
/// ```no_run
/// use axum::{extract::State, routing::get, Router};
/// use hashistack_demo_service_shared::{AppState, ServiceConfig};
///
/// async fn handler(State(state): State<AppState>) -> String {
///     state.endpoints().consul_services.clone()
/// }
///
/// let state = AppState::from_config(&ServiceConfig::from_env()).unwrap();
/// let app: Router = Router::new().route("/where", get(handler)).with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    client: UpstreamClient,
    endpoints: UpstreamEndpoints,
    vault_token: String,
    env: Arc<dyn EnvSource>,
}

impl AppState {
    /// Build state for production: a fresh upstream client and the real
    /// process environment.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, AppStateError> {
        let client = UpstreamClient::new(config.upstream_timeout)?;
        Ok(Self::from_components(client, config, Arc::new(ProcessEnv)))
    }

    /// Assemble state from pre-built parts. Useful in tests.
    pub fn from_components(
        client: UpstreamClient,
        config: &ServiceConfig,
        env: Arc<dyn EnvSource>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                client,
                endpoints: config.endpoints.clone(),
                vault_token: config.vault_token.clone(),
                env,
            }),
        }
    }

    pub fn client(&self) -> &UpstreamClient {
        &self.inner.client
    }

    pub fn endpoints(&self) -> &UpstreamEndpoints {
        &self.inner.endpoints
    }

    pub fn vault_token(&self) -> &str {
        &self.inner.vault_token
    }

    /// Whether a non-blank Vault token is configured.
    pub fn has_vault_token(&self) -> bool {
        !self.inner.vault_token.trim().is_empty()
    }

    pub fn env(&self) -> &dyn EnvSource {
        self.inner.env.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("endpoints", &self.inner.endpoints)
            .field("has_vault_token", &self.has_vault_token())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;
    use std::time::Duration;

    fn state_with_token(token: &str) -> AppState {
        let config = ServiceConfig {
            vault_token: token.to_string(),
            ..ServiceConfig::default()
        };
        let client = UpstreamClient::new(Duration::from_secs(1)).unwrap();
        AppState::from_components(client, &config, Arc::new(StaticEnv::new()))
    }

    #[test]
    fn test_app_state_from_config() {
        let state = AppState::from_config(&ServiceConfig::default()).unwrap();
        assert_eq!(state.vault_token(), "root");
        assert_eq!(state.endpoints(), &UpstreamEndpoints::default());
    }

    #[test]
    fn test_app_state_clone_shares_inner() {
        let state1 = state_with_token("abc");
        let state2 = state1.clone();
        assert!(Arc::ptr_eq(&state1.inner, &state2.inner));
    }

    #[test]
    fn test_has_vault_token() {
        assert!(state_with_token("root").has_vault_token());
        assert!(!state_with_token("   ").has_vault_token());
    }

    #[test]
    fn test_app_state_debug_hides_token() {
        let debug = format!("{:?}", state_with_token("s.secret"));
        assert!(debug.contains("AppState"));
        assert!(debug.contains("has_vault_token"));
        assert!(!debug.contains("s.secret"));
    }

    #[test]
    fn test_env_is_consulted() {
        let config = ServiceConfig::default();
        let client = UpstreamClient::new(Duration::from_secs(1)).unwrap();
        let env = StaticEnv::new().with("DB_USER", "alice");
        let state = AppState::from_components(client, &config, Arc::new(env));
        assert_eq!(state.env().var("DB_USER").as_deref(), Some("alice"));
    }

    #[test]
    fn test_app_state_error_display() {
        let err = AppStateError::from(LibError::MissingRequiredField { field: "id" });
        assert!(err.to_string().contains("upstream client"));
    }
}
