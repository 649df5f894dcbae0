//! Infrastructure layer module
//!
//! This module contains the adapters behind the domain ports:
//! - Credential providers (process environment, fixed maps)
//! - HTTP fetching and the `http::Request` body adapter
//! - Settings loading
//! - Logging setup

pub mod config;
pub mod credentials;
pub mod http;
pub mod logging;
