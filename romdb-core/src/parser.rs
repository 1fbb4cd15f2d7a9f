//! Parser for the mupen64plus ROM database (`mupen64plus.ini`).
//!
//! The file is a flat list of sections, one per known ROM image:
//! ```text
//! [0A8B96E4ED6A2B3E8E8A4DF42AF11F33]
//! GoodName=Super Game (USA) (Rev A)
//! CRC=12345678 9ABCDEF0
//! RefMD5=5DBE4F07D8E4E8DB1CE85B3DF2DF8CBE
//! Players=2
//! ```
//! Headers must be bracketed hex digits. Every other line is either a known
//! `Key=Value` pair for the current section or ignored.

use std::borrow::Cow;
use std::io::BufRead;
use std::path::Path;

use crate::error::RomDbError;
use crate::record::{RomDatabase, RomRecord, SharedSettings};

/// Parse a ROM database from a reader.
///
/// A repeated section hash is rejected with [`RomDbError::DuplicateKey`] and a
/// section without a `GoodName` line with [`RomDbError::MissingName`].
pub fn parse_database<R: BufRead>(mut reader: R) -> Result<RomDatabase, RomDbError> {
    let mut db = RomDatabase::new();
    // Lines before the first header have nowhere to go.
    let mut current: Option<Section> = None;

    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        let line = decode_line(&buf);

        if let Some(hash) = parse_header(&line) {
            if let Some(section) = current.take() {
                commit(&mut db, section)?;
            }
            log::debug!("Section [{hash}] at line {line_number}");
            current = Some(Section::new(hash, line_number));
            continue;
        }

        let Some(section) = current.as_mut() else {
            continue;
        };
        if let Some((key, value)) = parse_kv(&line) {
            section.apply(key, value);
        }
    }

    if let Some(section) = current.take() {
        commit(&mut db, section)?;
    }

    Ok(db)
}

/// Parse a ROM database from a file path.
pub fn parse_database_file(path: &Path) -> Result<RomDatabase, RomDbError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_database(reader)
}

/// A section being filled in, before it is known to be complete.
struct Section {
    hash: String,
    line: usize,
    display_name: Option<String>,
    crc: Option<String>,
    ref_hash: Option<String>,
    own: SharedSettings,
}

impl Section {
    fn new(hash: &str, line: usize) -> Self {
        Self {
            hash: hash.to_string(),
            line,
            display_name: None,
            crc: None,
            ref_hash: None,
            own: SharedSettings::default(),
        }
    }

    /// Store a key's value. Later lines for the same key win.
    fn apply(&mut self, key: &str, value: &str) {
        let slot = match key {
            "GoodName" => &mut self.display_name,
            "CRC" => &mut self.crc,
            "RefMD5" => &mut self.ref_hash,
            "SaveType" => &mut self.own.save_type,
            "Status" => &mut self.own.status,
            "Players" => &mut self.own.players,
            "Rumble" => &mut self.own.rumble,
            _ => return,
        };
        *slot = Some(value.to_string());
    }

    fn into_record(self) -> Result<RomRecord, RomDbError> {
        let display_name = self
            .display_name
            .ok_or_else(|| RomDbError::missing_name(&self.hash))?;
        Ok(RomRecord::parsed(
            self.hash,
            display_name,
            self.crc,
            self.ref_hash,
            self.own,
        ))
    }
}

fn commit(db: &mut RomDatabase, section: Section) -> Result<(), RomDbError> {
    let line = section.line;
    let record = section.into_record()?;
    db.insert(record)
        .map_err(|dup| RomDbError::duplicate_key(dup.hash, line))
}

/// Decode one raw line, replacing invalid UTF-8 and dropping the line ending.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Match a `[hexdigits]` header line and return the digits.
fn parse_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(inner)
    } else {
        None
    }
}

/// Split a `Key=Value` line. Lines with an empty value are not key lines.
fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    if value.is_empty() {
        return None;
    }
    Some((key.trim(), value))
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
