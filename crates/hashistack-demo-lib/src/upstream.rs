//! Thin HTTP GET client for the Consul and Vault agents.
//!
//! Every failure mode (DNS, connect, timeout, non-2xx status, undecodable body,
//! malformed header) is folded into [`UpstreamError`] so callers can report it
//! instead of failing the request. There is exactly one attempt per call.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Timeout applied to each upstream call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure of a single upstream call. `Display` is the message surfaced to
/// clients.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport, status, or body decoding failure reported by the client.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A header name or value could not be encoded.
    #[error("invalid value for header {name}")]
    InvalidHeader { name: String },
}

/// Raw response body, or the reason it could not be obtained.
pub type UpstreamResult = std::result::Result<String, UpstreamError>;

/// Shared HTTP client. Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    /// Build a client whose calls give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent())
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self { client })
    }

    /// Issue a GET to `url` with the given `(name, value)` headers and return
    /// the body as text.
    pub async fn get(&self, url: &str, headers: &[(&str, &str)]) -> UpstreamResult {
        let result = self.fetch(url, headers).await;
        match &result {
            Ok(body) => debug!(url = %url, bytes = body.len(), "upstream request succeeded"),
            Err(e) => warn!(url = %url, error = %e, "upstream request failed"),
        }
        result
    }

    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> UpstreamResult {
        let headers = header_map(headers)?;
        let response = self.client.get(url).headers(headers).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

fn header_map(headers: &[(&str, &str)]) -> std::result::Result<HeaderMap, UpstreamError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = || UpstreamError::InvalidHeader {
            name: (*name).to_string(),
        };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let mut header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        header_value.set_sensitive(true);
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn user_agent() -> String {
    format!("hashistack-demo-lib/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map_accepts_token() {
        let map = header_map(&[("X-Vault-Token", "root")]).unwrap();
        assert_eq!(map.get("x-vault-token").unwrap(), "root");
        assert!(map.get("x-vault-token").unwrap().is_sensitive());
    }

    #[test]
    fn test_header_map_empty() {
        assert!(header_map(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_header_map_rejects_bad_value() {
        let err = header_map(&[("X-Vault-Token", "line\nbreak")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for header X-Vault-Token");
    }

    #[test]
    fn test_header_map_rejects_bad_name() {
        let err = header_map(&[("bad header", "v")]).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidHeader { .. }));
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(user_agent().starts_with("hashistack-demo-lib/"));
    }
}
