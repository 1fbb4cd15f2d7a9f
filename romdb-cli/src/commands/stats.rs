use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romdb_core::{DatabaseStats, load_pages};

use crate::error::CliError;

pub(crate) fn run_stats(database: PathBuf) -> Result<(), CliError> {
    let (db, pages) = load_pages(&database)?;
    let stats = DatabaseStats::collect(&db, &pages);

    log::info!(
        "{}",
        database
            .display()
            .to_string()
            .if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Records:          {:>6}", stats.records);
    log::info!("  Games:            {:>6}", stats.pages);
    log::info!("  References:       {:>6}", stats.references);
    if stats.unresolved > 0 {
        log::info!(
            "  Unresolved:       {:>6}",
            stats.unresolved.if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    Ok(())
}
