//! Group resolved records into one page per canonical title.

use std::collections::HashMap;

use crate::record::{RomDatabase, RomRecord};
use crate::title;

/// A game page: every record sharing one canonical title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePage {
    pub title: String,
    /// Records in database order. Never empty.
    members: Vec<RomRecord>,
}

impl GamePage {
    fn new(title: String, first: RomRecord) -> Self {
        Self {
            title,
            members: vec![first],
        }
    }

    pub fn members(&self) -> &[RomRecord] {
        &self.members
    }

    /// First record added to the page. Its fields stand for the whole game
    /// in the index.
    pub fn first(&self) -> &RomRecord {
        &self.members[0]
    }

    /// Members sorted by display name (ordinal, case-sensitive).
    pub fn members_by_name(&self) -> Vec<&RomRecord> {
        let mut sorted: Vec<&RomRecord> = self.members.iter().collect();
        sorted.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        sorted
    }

    pub fn link_token(&self) -> String {
        title::link_token(&self.title)
    }

    pub fn cover_art_url(&self, art_base: &str) -> String {
        title::cover_art_url(art_base, &self.first().canonical_title())
    }
}

/// All game pages of a database, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct GamePages {
    pages: Vec<GamePage>,
    by_title: HashMap<String, usize>,
}

impl GamePages {
    pub fn get(&self, title: &str) -> Option<&GamePage> {
        self.by_title.get(title).map(|&i| &self.pages[i])
    }

    /// Pages in order of first appearance in the database.
    pub fn iter(&self) -> std::slice::Iter<'_, GamePage> {
        self.pages.iter()
    }

    /// Pages sorted by title (ordinal, case-sensitive).
    pub fn sorted_by_title(&self) -> Vec<&GamePage> {
        let mut sorted: Vec<&GamePage> = self.pages.iter().collect();
        sorted.sort_by(|a, b| a.title.cmp(&b.title));
        sorted
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn push(&mut self, record: RomRecord) {
        let title = record.canonical_title();
        match self.by_title.get(&title) {
            Some(&i) => self.pages[i].members.push(record),
            None => {
                self.by_title.insert(title.clone(), self.pages.len());
                self.pages.push(GamePage::new(title, record));
            }
        }
    }
}

impl<'a> IntoIterator for &'a GamePages {
    type Item = &'a GamePage;
    type IntoIter = std::slice::Iter<'a, GamePage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Group every record of `db` under its canonical title.
pub fn aggregate_pages(db: &RomDatabase) -> GamePages {
    let mut pages = GamePages::default();
    for record in db {
        pages.push(record.clone());
    }
    pages
}
