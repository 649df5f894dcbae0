//! Port trait definitions (Hexagonal Architecture)
//!
//! Capabilities a configuration source is handed instead of reaching for
//! ambient state:
//! - CredentialProvider: key/value lookup for URL credentials
//! - UrlOpener: opens a URL as a byte stream
//! - InboundRequest: an HTTP request exposing a readable body

pub mod credential_provider;
pub mod inbound_request;
pub mod url_opener;

pub use credential_provider::CredentialProvider;
pub use inbound_request::InboundRequest;
pub use url_opener::UrlOpener;
