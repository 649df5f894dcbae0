use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::settings::Settings;

/// Default settings file, looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "casc-source.yaml";

/// Prefix of environment variables that override settings
pub const ENV_PREFIX: &str = "CASC_SOURCE_";

/// Settings validation errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A credential key name is empty
    #[error("Credential key name for {0} cannot be empty")]
    EmptyCredentialKey(&'static str),

    /// Two credential roles share a key name
    #[error("Credential key names must be distinct, {0} is used twice")]
    DuplicateCredentialKey(String),

    /// The HTTP timeout is zero
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// The log level is not recognized
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// The log format is not recognized
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. casc-source.yaml in the working directory (optional)
    /// 3. Environment variables (CASC_SOURCE_* prefix, `__` separates nesting)
    pub fn load() -> Result<Settings> {
        Self::extract(Figment::new().merge(Yaml::file(DEFAULT_SETTINGS_FILE)))
            .context("Failed to extract settings from figment")
    }

    /// Load settings from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Settings file not found: {}", path.display());
        }
        Self::extract(Figment::new().merge(Yaml::file(path)))
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }

    fn extract(files: Figment) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(files)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        let keys = &settings.credentials;
        let named = [
            ("user", &keys.user),
            ("password", &keys.password),
            ("token", &keys.token),
        ];

        let mut seen = HashSet::new();
        for (field, key) in named {
            if key.trim().is_empty() {
                return Err(SettingsError::EmptyCredentialKey(field));
            }
            if !seen.insert(key.as_str()) {
                return Err(SettingsError::DuplicateCredentialKey(key.clone()));
            }
        }

        if settings.http.timeout_secs == 0 {
            return Err(SettingsError::InvalidTimeout(settings.http.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.as_str()) {
            return Err(SettingsError::InvalidLogLevel(settings.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&settings.logging.format.as_str()) {
            return Err(SettingsError::InvalidLogFormat(settings.logging.format.clone()));
        }

        Ok(())
    }
}
