//! casc-source - YAML configuration sources
//!
//! Reads configuration-as-code YAML text from a file path, a URL (with
//! optional Basic or Bearer authentication), a caller-owned byte stream, or
//! an inbound HTTP request body, all through [`ConfigSource`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): sources, readers, credential derivation and ports
//! - **Infrastructure Layer** (`infrastructure`): credential providers, HTTP, settings, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use casc_source::ConfigSource;
//!
//! fn main() -> Result<(), casc_source::SourceError> {
//!     let mut source = ConfigSource::from_url("https://config.example.com/jenkins.yaml");
//!     let yaml = source.read()?.into_string()?;
//!     println!("{yaml}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::{SourceError, SourceResult};
pub use domain::models::{
    derive_auth_header, AuthHeader, AuthScheme, ConfigReader, ConfigSource, CredentialKeys,
    HttpSettings, LoggingConfig, Settings, SourceKind, UrlOptions,
};
pub use domain::ports::{CredentialProvider, InboundRequest, UrlOpener};
pub use infrastructure::config::{SettingsError, SettingsLoader};
pub use infrastructure::credentials::{EnvCredentialProvider, StaticCredentialProvider};
pub use infrastructure::http::UrlFetcher;
