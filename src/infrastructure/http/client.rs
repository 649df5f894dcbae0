//! Blocking URL opener for URL-backed configuration sources.
//!
//! `http` and `https` URLs get one GET per call with at most one
//! `Authorization` header and no retries. `file` URLs open the local file.
//! All failures come back as `io::Error` so the source can report a single
//! error kind.

use std::fs::File;
use std::io::{self, Read};
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use reqwest::Url;

use crate::domain::models::auth::AuthHeader;
use crate::domain::models::settings::HttpSettings;
use crate::domain::ports::UrlOpener;

/// Opens configuration documents by URL.
///
/// The HTTP client is built per fetch from the stored settings, so nothing
/// carries over between reads.
#[derive(Debug, Clone, Default)]
pub struct UrlFetcher {
    settings: HttpSettings,
}

impl UrlFetcher {
    /// Create a fetcher from HTTP settings.
    pub const fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }

    fn client(&self) -> io::Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(self.settings.timeout_secs))
            .user_agent(self.settings.user_agent.clone())
            .build()
            .map_err(io::Error::other)
    }

    /// GET `url` and return the response positioned at the start of the body.
    ///
    /// Non-success statuses are errors.
    pub fn fetch(&self, url: &str, auth: Option<&AuthHeader>) -> io::Result<Response> {
        let url = parse_url(url)?;
        self.get(url, auth)
    }

    fn get(&self, url: Url, auth: Option<&AuthHeader>) -> io::Result<Response> {
        let mut request = self.client()?.get(url.clone());
        if let Some(auth) = auth {
            request = request.header(AUTHORIZATION, auth.value());
        }

        let response = request.send().map_err(io::Error::other)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "config fetch returned non-success status");
            return Err(io::Error::other(format!("HTTP {status} from {url}")));
        }
        Ok(response)
    }
}

impl UrlOpener for UrlFetcher {
    fn open(&self, url: &str, auth: Option<&AuthHeader>) -> io::Result<Box<dyn Read + Send>> {
        let url = parse_url(url)?;
        if url.scheme() == "file" {
            let path = url.to_file_path().map_err(|()| {
                io::Error::new(io::ErrorKind::InvalidInput, format!("not a local file URL: {url}"))
            })?;
            return Ok(Box::new(File::open(path)?));
        }
        Ok(Box::new(self.get(url, auth)?))
    }
}

fn parse_url(url: &str) -> io::Result<Url> {
    Url::parse(url).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}
