//! mupen64plus ROM database tooling.
//!
//! Loads `mupen64plus.ini`, resolves `RefMD5` links, groups ROMs into game
//! pages by normalized title, and renders wiki documents or a consistency
//! report from the result:
//!
//! ```text
//! parse_database -> resolve_references -> aggregate_pages -> render_site
//!                                                         -> validate_database
//! ```

pub mod aggregate;
pub mod error;
pub mod parser;
pub mod progress;
pub mod record;
pub mod render;
pub mod resolve;
pub mod settings;
pub mod stats;
pub mod title;
pub mod validate;

pub use aggregate::{GamePage, GamePages, aggregate_pages};
pub use error::RomDbError;
pub use parser::{parse_database, parse_database_file};
pub use progress::RomDbProgress;
pub use record::{RomDatabase, RomRecord, SharedSettings};
pub use render::{Dialect, Document, DocumentKind, PageRenderer, render_site};
pub use resolve::resolve_references;
pub use settings::Settings;
pub use stats::DatabaseStats;
pub use validate::{Finding, FindingCode, validate_database};

/// Load, resolve and aggregate a database file in one step.
pub fn load_pages(
    path: &std::path::Path,
) -> Result<(RomDatabase, GamePages), RomDbError> {
    let parsed = parse_database_file(path)?;
    let db = resolve_references(&parsed);
    let pages = aggregate_pages(&db);
    Ok((db, pages))
}
