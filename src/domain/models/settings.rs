//! Settings for sources, HTTP fetching and logging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings for casc-source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Names of the credential keys looked up for URL sources
    #[serde(default)]
    pub credentials: CredentialKeys,

    /// HTTP client settings for URL sources
    #[serde(default)]
    pub http: HttpSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Key names passed to the credential provider when a URL source is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialKeys {
    /// Key holding the Basic auth user name
    #[serde(default = "default_user_key")]
    pub user: String,

    /// Key holding the Basic auth password
    #[serde(default = "default_password_key")]
    pub password: String,

    /// Key holding the Bearer token
    #[serde(default = "default_token_key")]
    pub token: String,
}

fn default_user_key() -> String {
    "CASC_CONFIG_USER".to_string()
}

fn default_password_key() -> String {
    "CASC_CONFIG_PASSWORD".to_string()
}

fn default_token_key() -> String {
    "CASC_CONFIG_TOKEN".to_string()
}

impl Default for CredentialKeys {
    fn default() -> Self {
        Self {
            user: default_user_key(),
            password: default_password_key(),
            token: default_token_key(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("casc-source/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for an additional JSON log file
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
