//! Errors raised while opening or reading a configuration source.

use std::io;

use thiserror::Error;

/// The single failure kind of a configuration source.
///
/// Malformed URLs, unreachable hosts, non-success HTTP statuses, missing
/// files, permission failures and broken streams all surface as `Io`.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Opening or reading the origin failed.
    #[error("failed to read config source {origin}: {source}")]
    Io {
        /// Description of the origin that failed.
        origin: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Result alias for configuration source operations.
pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
    /// Wrap an I/O error with the origin it came from.
    pub fn io(origin: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            origin: origin.into(),
            source,
        }
    }

    /// The underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }

    /// Description of the origin that failed.
    pub fn origin(&self) -> &str {
        match self {
            Self::Io { origin, .. } => origin,
        }
    }
}
