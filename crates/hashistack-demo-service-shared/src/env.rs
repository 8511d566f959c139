//! Environment lookups behind a trait so handlers can be tested without
//! touching the process environment.

use std::collections::HashMap;

/// Source of environment variables.
pub trait EnvSource: Send + Sync {
    /// Value of `key`, if set. Values that are not valid UTF-8 are converted
    /// lossily so that presence is never hidden.
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` is set at all, including to the empty string.
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// Fixed set of variables, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
