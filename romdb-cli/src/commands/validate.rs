use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romdb_core::{RomDbProgress, load_pages, validate_database};

use crate::error::CliError;

/// Check the database and report every finding.
pub(crate) fn run_validate(database: PathBuf, json: bool) -> Result<(), CliError> {
    log::debug!("Loading {}", database.display());
    let (db, pages) = load_pages(&database)?;

    let findings = validate_database(&db, &pages, &|event| {
        if let RomDbProgress::PageChecked { title } = event {
            log::debug!("Checked {title}");
        }
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
        return Ok(());
    }

    for finding in &findings {
        log::info!(
            "{}  {}",
            finding.name,
            finding.message.if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    log::info!("");
    if findings.is_empty() {
        log::info!(
            "{}",
            "Finished checking database.".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        let mismatches = findings.iter().filter(|f| f.code.is_mismatch()).count();
        log::info!(
            "{} ({} reference findings, {} mismatches)",
            "Finished checking database.".if_supports_color(Stdout, |t| t.bold()),
            findings.len() - mismatches,
            mismatches,
        );
    }
    Ok(())
}
