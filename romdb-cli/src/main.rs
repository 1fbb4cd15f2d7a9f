//! romdb CLI
//!
//! Command-line front end for the mupen64plus ROM database: generates wiki
//! pages and reports database inconsistencies.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use romdb_core::settings::load_settings;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings()?;
    let database = settings.database_path(cli.database);

    match cli.command {
        Commands::Wiki { args } => commands::wiki::run_wiki(&settings, database, args, cli.quiet),
        Commands::Validate { json } => commands::validate::run_validate(database, json),
        Commands::Stats => commands::stats::run_stats(database),
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::run_config_show(&settings),
                ConfigAction::Path => commands::config::run_config_path(),
            }
            Ok(())
        }
    }
}
