//! Consistency checks over a resolved database and its game pages.

use std::fmt;

use serde::Serialize;

use crate::aggregate::GamePages;
use crate::progress::RomDbProgress;
use crate::record::{RomDatabase, RomRecord};

/// Kind of problem a finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCode {
    /// `RefMD5` names the record itself
    SelfReference,
    /// `RefMD5` names a hash that is not in the database
    InvalidReference,
    /// The referenced record has a `RefMD5` of its own
    DoubleLinkedReference,
    /// The referenced record is a different game
    IncorrectReference,
    StatusMismatch,
    PlayersMismatch,
    SaveTypeMismatch,
    RumbleMismatch,
}

impl FindingCode {
    /// Short phrase used in the plain-text report.
    pub fn phrase(self) -> &'static str {
        match self {
            FindingCode::SelfReference => "self reference",
            FindingCode::InvalidReference => "invalid reference",
            FindingCode::DoubleLinkedReference => "double-linked reference",
            FindingCode::IncorrectReference => "incorrect reference",
            FindingCode::StatusMismatch => "status mismatch",
            FindingCode::PlayersMismatch => "players mismatch",
            FindingCode::SaveTypeMismatch => "saveType mismatch",
            FindingCode::RumbleMismatch => "rumble mismatch",
        }
    }

    /// Whether the finding comes from the per-page field comparison.
    pub fn is_mismatch(self) -> bool {
        matches!(
            self,
            FindingCode::StatusMismatch
                | FindingCode::PlayersMismatch
                | FindingCode::SaveTypeMismatch
                | FindingCode::RumbleMismatch
        )
    }
}

/// One reported problem, naming the offending record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub name: String,
    pub hash: String,
    pub code: FindingCode,
    pub message: &'static str,
}

impl Finding {
    pub fn new(record: &RomRecord, code: FindingCode) -> Self {
        Self {
            name: record.display_name.clone(),
            hash: record.hash.clone(),
            code,
            message: code.phrase(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.name, self.message)
    }
}

/// Check every record's reference and every page's field consistency.
///
/// Reference findings come first, in database order, then mismatch findings
/// page by page. Within a page each member is compared only with the member
/// before it, so an A/B/A pattern across three members reports two
/// mismatches rather than every differing pair.
pub fn validate_database(
    db: &RomDatabase,
    pages: &GamePages,
    progress: &dyn Fn(RomDbProgress),
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let total = db.len();

    for (i, record) in db.iter().enumerate() {
        check_reference(db, record, &mut findings);
        progress(RomDbProgress::RecordChecked {
            current: i + 1,
            total,
        });
    }

    for page in pages {
        for pair in page.members().windows(2) {
            check_fields(&pair[0], &pair[1], &mut findings);
        }
        progress(RomDbProgress::PageChecked {
            title: page.title.clone(),
        });
    }

    progress(RomDbProgress::ValidationDone {
        findings: findings.len(),
    });
    findings
}

fn check_reference(db: &RomDatabase, record: &RomRecord, findings: &mut Vec<Finding>) {
    let Some(ref_hash) = record.ref_hash.as_deref() else {
        return;
    };

    if ref_hash == record.hash {
        findings.push(Finding::new(record, FindingCode::SelfReference));
    }

    match db.get(ref_hash) {
        None => findings.push(Finding::new(record, FindingCode::InvalidReference)),
        Some(parent) => {
            if parent.ref_hash.is_some() {
                findings.push(Finding::new(record, FindingCode::DoubleLinkedReference));
            }
            if parent.base_name() != record.base_name() {
                findings.push(Finding::new(record, FindingCode::IncorrectReference));
            }
        }
    }
}

fn check_fields(prev: &RomRecord, rom: &RomRecord, findings: &mut Vec<Finding>) {
    let fields = [
        (&prev.status, &rom.status, FindingCode::StatusMismatch),
        (&prev.players, &rom.players, FindingCode::PlayersMismatch),
        (&prev.save_type, &rom.save_type, FindingCode::SaveTypeMismatch),
        (&prev.rumble, &rom.rumble, FindingCode::RumbleMismatch),
    ];
    for (before, now, code) in fields {
        if before != now {
            findings.push(Finding::new(rom, code));
        }
    }
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
