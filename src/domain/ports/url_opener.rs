use std::io::{self, Read};

use crate::domain::models::auth::AuthHeader;

/// Port trait for opening a URL as a byte stream.
///
/// Each call opens the URL again. The returned handle belongs to the caller
/// and is released when dropped.
pub trait UrlOpener: Send + Sync {
    /// Open `url`, sending `auth` as the `Authorization` header when the
    /// scheme has one. Malformed URLs fail with `InvalidInput`.
    fn open(&self, url: &str, auth: Option<&AuthHeader>) -> io::Result<Box<dyn Read + Send>>;
}
