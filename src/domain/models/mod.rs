//! Domain models: sources, readers, credential headers and settings.

pub mod auth;
pub mod reader;
pub mod settings;
pub mod source;

pub use auth::{derive_auth_header, is_blank, AuthHeader, AuthScheme};
pub use reader::ConfigReader;
pub use settings::{CredentialKeys, HttpSettings, LoggingConfig, Settings};
pub use source::{ConfigSource, SourceKind, UrlOptions};
