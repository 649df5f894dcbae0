//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting on stderr
//! - Optional JSON log file

pub mod config;
pub mod logger;

pub use config::LogFormat;
pub use logger::LoggerImpl;
