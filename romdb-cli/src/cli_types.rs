//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use romdb_core::Dialect;

#[derive(Parser)]
#[command(name = "romdb")]
#[command(about = "Generate wiki pages and consistency reports from the mupen64plus ROM database", long_about = None)]
pub(crate) struct Cli {
    /// ROM database file (defaults to settings, then ./mupen64plus.ini)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for wiki generation.
#[derive(Args, Clone)]
pub(crate) struct WikiArgs {
    /// Output folder for the generated documents (default: Pages)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Markup dialect: markdown or mediawiki
    #[arg(long)]
    pub dialect: Option<Dialect>,

    /// Base URL for cover-art images
    #[arg(long)]
    pub art_url: Option<String>,

    /// Show the documents that would be written without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate one page per game plus an index page
    Wiki {
        #[command(flatten)]
        args: WikiArgs,
    },

    /// Check references and per-game field consistency
    Validate {
        /// Print findings as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show record, page and reference counts
    Stats,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings file
    Show,

    /// Print the settings file path
    Path,
}
