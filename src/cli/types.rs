//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::describe::DescribeArgs;
use super::commands::read::ReadArgs;

#[derive(Parser, Debug)]
#[command(name = "casc-source")]
#[command(about = "Read configuration-as-code YAML from a file, URL or stdin", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (defaults to ./casc-source.yaml when present)
    #[arg(short, long, global = true, env = "CASC_SOURCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the content of a configuration source
    Read(ReadArgs),

    /// Print how a configuration source would be described
    Describe(DescribeArgs),
}

/// A source named on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceArg {
    /// `-`: standard input
    Stdin,
    /// An `http://`, `https://` or `file:` URL
    Url(String),
    /// Anything else is a filesystem path
    Path(PathBuf),
}

impl SourceArg {
    /// Classify a raw command-line argument.
    pub fn parse(raw: &str) -> Self {
        if raw == "-" {
            Self::Stdin
        } else if ["http://", "https://", "file:"]
            .iter()
            .any(|scheme| raw.starts_with(scheme))
        {
            Self::Url(raw.to_string())
        } else {
            Self::Path(PathBuf::from(raw))
        }
    }
}

impl std::str::FromStr for SourceArg {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_arg_classification() {
        assert_eq!(SourceArg::parse("-"), SourceArg::Stdin);
        assert_eq!(
            SourceArg::parse("https://example.com/jenkins.yaml"),
            SourceArg::Url("https://example.com/jenkins.yaml".to_string())
        );
        assert_eq!(
            SourceArg::parse("file:///etc/casc/jenkins.yaml"),
            SourceArg::Url("file:///etc/casc/jenkins.yaml".to_string())
        );
        assert_eq!(
            SourceArg::parse("./jenkins.yaml"),
            SourceArg::Path(PathBuf::from("./jenkins.yaml"))
        );
    }

    #[test]
    fn test_parse_read_command() {
        let cli = Cli::try_parse_from(["casc-source", "--json", "read", "-"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Read(args) => assert_eq!(args.source, SourceArg::Stdin),
            Commands::Describe(_) => panic!("Expected read command"),
        }
    }

    #[test]
    fn test_parse_describe_with_config() {
        let cli = Cli::try_parse_from([
            "casc-source",
            "describe",
            "http://config.local/a.yaml",
            "--config",
            "settings.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("settings.yaml")));
        assert!(matches!(cli.command, Commands::Describe(_)));
    }
}
