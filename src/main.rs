//! casc-source CLI entry point.

use clap::Parser;

use casc_source::cli::{Cli, Commands};
use casc_source::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();

    let settings = match casc_source::cli::load_settings(&cli) {
        Ok(settings) => settings,
        Err(err) => casc_source::cli::handle_error(&err, cli.json),
    };

    let _logger = match LoggerImpl::init(&settings.logging) {
        Ok(logger) => logger,
        Err(err) => casc_source::cli::handle_error(&err, cli.json),
    };

    let result = match &cli.command {
        Commands::Read(args) => casc_source::cli::commands::read::execute(args, &settings, cli.json),
        Commands::Describe(args) => {
            casc_source::cli::commands::describe::execute(args, &settings, cli.json)
        }
    };

    if let Err(err) = result {
        casc_source::cli::handle_error(&err, cli.json);
    }
}
