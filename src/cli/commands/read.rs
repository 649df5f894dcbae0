//! Implementation of the `casc-source read` command.

use anyhow::{Context, Result};
use clap::Args;

use super::open_source;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::SourceArg;
use crate::domain::models::settings::Settings;

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Path, http(s) URL, or `-` for stdin
    pub source: SourceArg,
}

#[derive(Debug, serde::Serialize)]
pub struct ReadOutput {
    pub source: String,
    pub kind: String,
    pub content: String,
}

impl CommandOutput for ReadOutput {
    fn to_human(&self) -> String {
        self.content.clone()
    }
}

pub fn execute(args: &ReadArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let mut stdin = std::io::stdin();
    let mut source = open_source(&args.source, settings, &mut stdin);

    let content = source
        .read()
        .and_then(crate::ConfigReader::into_string)
        .with_context(|| format!("Failed to read {source}"))?;

    output(
        &ReadOutput {
            source: source.describe(),
            kind: source.kind().to_string(),
            content,
        },
        json_mode,
    );
    Ok(())
}
