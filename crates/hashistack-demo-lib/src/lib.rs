//! HashiStack demo library entry points.
//!
//! This crate holds everything the demo service does that is not HTTP glue:
//! the optional-value helpers, the user records they operate on, and the thin
//! client used to query the Consul and Vault agents. Higher-level consumers
//! (the service binary, tests) should only depend on the items exported here.
//!

#![deny(warnings)]

pub mod error;
pub mod optional;
pub mod upstream;
pub mod user;

pub use error::{Error, Result};
pub use upstream::{UpstreamClient, UpstreamError, UpstreamResult, DEFAULT_TIMEOUT};
pub use user::{Profile, User, UserInfo, NO_CONTACT_INFO};
