//! Default adapters for URL sources: [`UrlFetcher`] and the process
//! environment.

use crate::domain::models::settings::Settings;
use crate::domain::models::source::{ConfigSource, UrlOptions};
use crate::infrastructure::credentials::EnvCredentialProvider;
use crate::infrastructure::http::UrlFetcher;

impl UrlOptions {
    /// Options fetching with the given HTTP settings and looking credentials
    /// up in the process environment under the configured key names.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(UrlFetcher::new(settings.http.clone()), EnvCredentialProvider)
            .with_keys(settings.credentials.clone())
    }
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl ConfigSource<'_> {
    /// A source fetching `url` with default [`UrlOptions`].
    ///
    /// Accepts a parsed `reqwest::Url` or a string. The URL is not validated
    /// until it is read.
    pub fn from_url(url: impl AsRef<str>) -> Self {
        Self::from_url_with(url, UrlOptions::default())
    }
}
