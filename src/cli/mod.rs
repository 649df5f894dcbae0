//! Command-line interface for casc-source.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, SourceArg};

use crate::domain::models::settings::Settings;
use crate::infrastructure::config::SettingsLoader;

/// Load settings from `--config` when given, otherwise from the default
/// locations.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    match &cli.config {
        Some(path) => SettingsLoader::load_from_file(path),
        None => SettingsLoader::load(),
    }
}

/// Print an error and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let causes: Vec<String> = err.chain().skip(1).map(|cause| cause.to_string()).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": causes,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
