//! CLI command implementations.

pub mod describe;
pub mod read;

use std::io;

use crate::cli::types::SourceArg;
use crate::domain::models::settings::Settings;
use crate::domain::models::source::{ConfigSource, UrlOptions};

/// Build the source named by `arg`. `stdin` backs the `-` argument.
pub(crate) fn open_source<'a>(
    arg: &SourceArg,
    settings: &Settings,
    stdin: &'a mut io::Stdin,
) -> ConfigSource<'a> {
    match arg {
        SourceArg::Stdin => ConfigSource::from_byte_stream(stdin),
        SourceArg::Url(url) => ConfigSource::from_url_with(url, UrlOptions::from_settings(settings)),
        SourceArg::Path(path) => ConfigSource::from_path(path),
    }
}
