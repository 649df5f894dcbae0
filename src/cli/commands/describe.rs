//! Implementation of the `casc-source describe` command.

use anyhow::Result;
use clap::Args;

use super::open_source;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::SourceArg;
use crate::domain::models::settings::Settings;

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Path, http(s) URL, or `-` for stdin
    pub source: SourceArg,
}

#[derive(Debug, serde::Serialize)]
pub struct DescribeOutput {
    pub source: String,
    pub kind: String,
}

impl CommandOutput for DescribeOutput {
    fn to_human(&self) -> String {
        format!("{} ({})\n", self.source, self.kind)
    }
}

pub fn execute(args: &DescribeArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let mut stdin = std::io::stdin();
    let source = open_source(&args.source, settings, &mut stdin);

    output(
        &DescribeOutput {
            source: source.describe(),
            kind: source.kind().to_string(),
        },
        json_mode,
    );
    Ok(())
}
