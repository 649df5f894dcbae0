//! HTTP infrastructure
//!
//! - Blocking URL opener for URL-backed sources
//! - `InboundRequest` adapter for `http::Request`
//! - Default `UrlOptions` wiring

pub mod client;
pub mod defaults;
pub mod request;

pub use client::UrlFetcher;
