use thiserror::Error;

/// Convenient result alias for the HashiStack demo library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a value the caller must supply was absent.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// Raised when the shared HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl Error {
    pub(crate) fn missing(field: &'static str) -> Self {
        Error::MissingRequiredField { field }
    }
}
