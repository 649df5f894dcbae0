//! Configuration sources over the four supported origin kinds.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::errors::{SourceError, SourceResult};
use crate::domain::models::auth::{derive_auth_header, AuthHeader};
use crate::domain::models::reader::ConfigReader;
use crate::domain::models::settings::CredentialKeys;
use crate::domain::ports::{CredentialProvider, InboundRequest, UrlOpener};

/// The kind of origin a [`ConfigSource`] is backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A filesystem path
    Path,
    /// A URL fetched over HTTP(S)
    Url,
    /// A caller-supplied byte stream
    ByteStream,
    /// An inbound HTTP request body
    Request,
}

impl SourceKind {
    /// Returns the string representation used in log fields
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Url => "url",
            Self::ByteStream => "byte-stream",
            Self::Request => "request",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a URL source authenticates and connects.
///
/// The default options, built from [`Settings`](crate::Settings), fetch with
/// a blocking HTTP client and look credentials up in the process
/// environment.
#[derive(Clone)]
pub struct UrlOptions {
    /// Opens the URL on every read
    pub opener: Arc<dyn UrlOpener>,
    /// Where credential values are looked up when the source is opened
    pub credentials: Arc<dyn CredentialProvider>,
    /// Key names passed to `credentials`
    pub keys: CredentialKeys,
}

impl UrlOptions {
    /// Options over the given adapters with the default key names.
    pub fn new(
        opener: impl UrlOpener + 'static,
        credentials: impl CredentialProvider + 'static,
    ) -> Self {
        Self {
            opener: Arc::new(opener),
            credentials: Arc::new(credentials),
            keys: CredentialKeys::default(),
        }
    }

    /// Replace the credential provider.
    #[must_use]
    pub fn with_credentials(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.credentials = Arc::new(provider);
        self
    }

    /// Replace the credential key names.
    #[must_use]
    pub fn with_keys(mut self, keys: CredentialKeys) -> Self {
        self.keys = keys;
        self
    }

    fn auth_header(&self) -> Option<AuthHeader> {
        let user = self.credentials.lookup(&self.keys.user);
        let password = self.credentials.lookup(&self.keys.password);
        let token = self.credentials.lookup(&self.keys.token);
        derive_auth_header(user.as_deref(), password.as_deref(), token.as_deref())
    }
}

impl fmt::Debug for UrlOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlOptions")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

enum Origin<'a> {
    Path(PathBuf),
    Url { url: String, options: UrlOptions },
    ByteStream(&'a mut (dyn Read + Send)),
    Request(&'a mut dyn InboundRequest),
}

/// A YAML configuration source.
///
/// The origin and the way it is opened are fixed at construction. Every call
/// to [`read`](Self::read) opens the origin again: a path is reopened, a URL
/// is fetched again with freshly looked-up credentials. Nothing is cached.
///
/// Path and URL sources own the handle they open and release it when the
/// returned reader is closed or dropped. Byte-stream and request sources
/// borrow the caller's handle and never close it.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use casc_source::ConfigSource;
///
/// let mut stream = Cursor::new("key: value\n");
/// let mut source = ConfigSource::from_byte_stream(&mut stream);
/// let content = source.read().unwrap().into_string().unwrap();
/// assert_eq!(content, "key: value\n");
/// ```
pub struct ConfigSource<'a> {
    origin: Origin<'a>,
}

impl<'a> ConfigSource<'a> {
    /// A source reading the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::Path(path.as_ref().to_path_buf()),
        }
    }

    /// A source over an already-open byte stream owned by the caller.
    pub fn from_byte_stream(stream: &'a mut (dyn Read + Send)) -> Self {
        Self {
            origin: Origin::ByteStream(stream),
        }
    }

    /// A source fetching `url` with the given options.
    ///
    /// Accepts a parsed URL or a string; both keep the URL's external string
    /// form. The URL is not validated until it is read.
    pub fn from_url_with(url: impl AsRef<str>, options: UrlOptions) -> Self {
        Self {
            origin: Origin::Url {
                url: url.as_ref().to_string(),
                options,
            },
        }
    }

    /// A source over the body of an inbound HTTP request.
    ///
    /// The body is decoded as UTF-8; the request's content type is not
    /// consulted.
    pub fn from_request(request: &'a mut dyn InboundRequest) -> Self {
        Self {
            origin: Origin::Request(request),
        }
    }

    /// The kind of origin backing this source.
    pub fn kind(&self) -> SourceKind {
        match &self.origin {
            Origin::Path(_) => SourceKind::Path,
            Origin::Url { .. } => SourceKind::Url,
            Origin::ByteStream(_) => SourceKind::ByteStream,
            Origin::Request(_) => SourceKind::Request,
        }
    }

    /// Human readable form of the origin.
    pub fn describe(&self) -> String {
        match &self.origin {
            Origin::Path(path) => path.display().to_string(),
            Origin::Url { url, .. } => url.clone(),
            Origin::ByteStream(_) => "byte stream".to_string(),
            Origin::Request(request) => request.describe(),
        }
    }

    /// Open the origin and return a text stream positioned at its start.
    pub fn read(&mut self) -> SourceResult<ConfigReader<'_>> {
        let kind = self.kind();
        let origin = self.describe();

        match &mut self.origin {
            Origin::Path(path) => {
                tracing::debug!(kind = %kind, origin = %origin, "opening config source");
                let file = File::open(path.as_path()).map_err(|e| SourceError::io(&origin, e))?;
                Ok(ConfigReader::owned(origin, file))
            }
            Origin::Url { url, options } => {
                let header = options.auth_header();
                tracing::debug!(
                    kind = %kind,
                    origin = %origin,
                    auth = header.as_ref().map_or("none", |h| h.scheme().as_str()),
                    "opening config source"
                );
                let handle = options
                    .opener
                    .open(url, header.as_ref())
                    .map_err(|e| SourceError::io(&origin, e))?;
                Ok(ConfigReader::owned(origin, handle))
            }
            Origin::ByteStream(stream) => {
                tracing::debug!(kind = %kind, origin = %origin, "opening config source");
                Ok(ConfigReader::borrowed(origin, &mut **stream))
            }
            Origin::Request(request) => {
                tracing::debug!(kind = %kind, origin = %origin, "opening config source");
                let body = request.body().map_err(|e| SourceError::io(&origin, e))?;
                Ok(ConfigReader::borrowed(origin, body))
            }
        }
    }
}

impl fmt::Display for ConfigSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigSource: {}", self.describe())
    }
}

impl fmt::Debug for ConfigSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigSource")
            .field("kind", &self.kind())
            .field("origin", &self.describe())
            .finish()
    }
}
