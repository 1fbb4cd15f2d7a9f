//! Wiki document rendering.
//!
//! One document is produced per game page plus one index document listing
//! every game. The markup itself is a [`PageRenderer`] strategy so the same
//! aggregated pages can be published as Markdown (GitHub wiki) or MediaWiki.

pub mod markdown;
pub mod mediawiki;

pub use markdown::MarkdownRenderer;
pub use mediawiki::MediaWikiRenderer;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::aggregate::{GamePage, GamePages};
use crate::progress::RomDbProgress;
use crate::record::RomRecord;

/// Placeholder for a field the database does not set.
pub const UNKNOWN: &str = "Unknown";

/// Section headings every game page carries, in order.
pub const PAGE_SECTIONS: [&str; 3] = ["Recommended Settings", "Known Issues", "Known Versions"];

/// Trait for wiki markup generators.
pub trait PageRenderer {
    fn name(&self) -> &'static str;

    /// Extension (without dot) for files holding this markup.
    fn file_extension(&self) -> &'static str;

    /// Title of the index document.
    fn index_title(&self) -> &'static str;

    /// Body of one game page.
    fn render_page(&self, page: &GamePage) -> String;

    /// Body of the index document. Rows are sorted by title.
    fn render_index(&self, pages: &GamePages) -> String;

    /// Read the `(display name, hash)` pairs back out of a page body's
    /// "Known Versions" list.
    fn known_versions(&self, body: &str) -> Vec<(String, String)>;
}

/// Markup dialect selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Markdown,
    #[serde(alias = "wiki")]
    MediaWiki,
}

impl Dialect {
    /// Build the renderer for this dialect, linking cover art under `art_base`.
    pub fn renderer(self, art_base: impl Into<String>) -> Box<dyn PageRenderer> {
        match self {
            Dialect::Markdown => Box::new(MarkdownRenderer::new(art_base)),
            Dialect::MediaWiki => Box::new(MediaWikiRenderer::new(art_base)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Markdown => "markdown",
            Dialect::MediaWiki => "mediawiki",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Dialect::Markdown),
            "mediawiki" | "wiki" => Ok(Dialect::MediaWiki),
            other => Err(format!(
                "unknown dialect '{other}' (expected 'markdown' or 'mediawiki')"
            )),
        }
    }
}

/// Whether a document is a game page or the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Game,
    Index,
}

/// A rendered document, ready to be written or published under `title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub kind: DocumentKind,
    pub body: String,
}

/// Render every game page (in order of first appearance) followed by the
/// index document.
pub fn render_site(
    pages: &GamePages,
    renderer: &dyn PageRenderer,
    progress: &dyn Fn(RomDbProgress),
) -> Vec<Document> {
    let total = pages.len();
    let mut docs = Vec::with_capacity(total + 1);

    for (i, page) in pages.iter().enumerate() {
        docs.push(Document {
            title: page.title.clone(),
            kind: DocumentKind::Game,
            body: renderer.render_page(page),
        });
        progress(RomDbProgress::PageRendered {
            title: page.title.clone(),
            current: i + 1,
            total,
        });
    }

    docs.push(Document {
        title: renderer.index_title().to_string(),
        kind: DocumentKind::Index,
        body: renderer.render_index(pages),
    });
    progress(RomDbProgress::IndexRendered { pages: total });

    docs
}

/// Index columns taken from a page's first member: status, players,
/// rumble, save type.
pub(crate) fn index_columns(first: &RomRecord) -> [&str; 4] {
    [
        first.status.as_deref().unwrap_or(UNKNOWN),
        first.players.as_deref().unwrap_or(UNKNOWN),
        first.rumble.as_deref().unwrap_or(UNKNOWN),
        first.save_type.as_deref().unwrap_or(UNKNOWN),
    ]
}

#[cfg(test)]
#[path = "../tests/render_tests.rs"]
mod tests;
