//! Credentials management infrastructure
//!
//! Credential provider adapters:
//! - Process environment lookup
//! - Fixed key/value maps for tests and embedding

use std::collections::HashMap;

use crate::domain::ports::CredentialProvider;

/// Reads credentials from the process environment.
///
/// Unset variables and values that are not valid Unicode both read as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialProvider;

impl CredentialProvider for EnvCredentialProvider {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Serves credentials from a fixed map.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    values: HashMap<String, String>,
}

impl StaticCredentialProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider from `(key, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |provider, (key, value)| provider.with(*key, *value))
    }

    /// Add or replace a value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
