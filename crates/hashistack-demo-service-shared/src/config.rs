//! Service configuration resolved once at startup.
//!
//! # Environment Variables
//!
//! - `VAULT_TOKEN`: token sent to Vault as `X-Vault-Token` (default: `root`)
//! - `SERVICE_PORT`: HTTP port (default: 8080)
//! - `UPSTREAM_TIMEOUT_SECS`: per-call upstream timeout (default: 5)

use std::time::Duration;

use hashistack_demo_lib::DEFAULT_TIMEOUT;

use crate::env::EnvSource;

/// Service-registry endpoint listing registered services.
pub const CONSUL_SERVICES_URL: &str = "http://consul:8500/v1/agent/services";

/// Secret-store endpoint holding the application secret (KV v2).
pub const VAULT_SECRET_URL: &str = "http://vault:8200/v1/secret/data/myapp";

pub const DEFAULT_VAULT_TOKEN: &str = "root";
pub const DEFAULT_PORT: u16 = 8080;

/// The two upstream URLs queried by `/hello`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    pub consul_services: String,
    pub vault_secret: String,
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self {
            consul_services: CONSUL_SERVICES_URL.to_string(),
            vault_secret: VAULT_SECRET_URL.to_string(),
        }
    }
}

/// Startup configuration. The Vault token is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub vault_token: String,
    pub upstream_timeout: Duration,
    pub endpoints: UpstreamEndpoints,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            vault_token: DEFAULT_VAULT_TOKEN.to_string(),
            upstream_timeout: DEFAULT_TIMEOUT,
            endpoints: UpstreamEndpoints::default(),
        }
    }
}

impl ServiceConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&crate::env::ProcessEnv)
    }

    /// Resolve configuration from `env`. Unparseable numbers fall back to
    /// their defaults.
    pub fn from_source(env: &dyn EnvSource) -> Self {
        let port = env
            .var("SERVICE_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let vault_token = env
            .var("VAULT_TOKEN")
            .unwrap_or_else(|| DEFAULT_VAULT_TOKEN.to_string());
        let upstream_timeout = env
            .var("UPSTREAM_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            port,
            vault_token,
            upstream_timeout,
            endpoints: UpstreamEndpoints::default(),
        }
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("port", &self.port)
            .field("vault_token", &"<redacted>")
            .field("upstream_timeout", &self.upstream_timeout)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}
