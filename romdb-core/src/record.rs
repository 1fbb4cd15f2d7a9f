//! ROM records and the hash-indexed database that holds them.

use std::collections::HashMap;

use serde::Serialize;

/// Settings a record can take from the record its `RefMD5` names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedSettings {
    pub save_type: Option<String>,
    pub status: Option<String>,
    pub players: Option<String>,
    pub rumble: Option<String>,
}

/// One `[hash]` section of the ROM database.
///
/// `save_type`, `status`, `players` and `rumble` are the effective values
/// after reference resolution. The values written in the record's own
/// section are kept separately in [`RomRecord::own`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomRecord {
    /// Section header hash (the ROM's MD5). Never empty.
    pub hash: String,
    /// `GoodName` value, including any region/revision tags.
    pub display_name: String,
    /// `CRC` value as written in the file (two 32-bit words).
    pub crc: Option<String>,
    /// `RefMD5` value: the record this one takes shared settings from.
    pub ref_hash: Option<String>,
    pub save_type: Option<String>,
    pub status: Option<String>,
    pub players: Option<String>,
    pub rumble: Option<String>,
    #[serde(skip)]
    own: SharedSettings,
}

impl RomRecord {
    pub fn new(hash: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            display_name: display_name.into(),
            crc: None,
            ref_hash: None,
            save_type: None,
            status: None,
            players: None,
            rumble: None,
            own: SharedSettings::default(),
        }
    }

    /// A record as read from its section; effective values start as its own.
    pub(crate) fn parsed(
        hash: String,
        display_name: String,
        crc: Option<String>,
        ref_hash: Option<String>,
        own: SharedSettings,
    ) -> Self {
        Self {
            hash,
            display_name,
            crc,
            ref_hash,
            save_type: own.save_type.clone(),
            status: own.status.clone(),
            players: own.players.clone(),
            rumble: own.rumble.clone(),
            own,
        }
    }

    /// Values written in this record's own section, before resolution.
    pub fn own(&self) -> &SharedSettings {
        &self.own
    }

    /// Copy of this record whose effective values are `shared`. Own values
    /// are kept.
    pub(crate) fn with_effective(&self, shared: &SharedSettings) -> Self {
        Self {
            save_type: shared.save_type.clone(),
            status: shared.status.clone(),
            players: shared.players.clone(),
            rumble: shared.rumble.clone(),
            ..self.clone()
        }
    }

    pub fn with_ref(mut self, ref_hash: impl Into<String>) -> Self {
        self.ref_hash = Some(ref_hash.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self.own.status = self.status.clone();
        self
    }

    pub fn with_players(mut self, players: impl Into<String>) -> Self {
        self.players = Some(players.into());
        self.own.players = self.players.clone();
        self
    }

    pub fn with_save_type(mut self, save_type: impl Into<String>) -> Self {
        self.save_type = Some(save_type.into());
        self.own.save_type = self.save_type.clone();
        self
    }

    pub fn with_rumble(mut self, rumble: impl Into<String>) -> Self {
        self.rumble = Some(rumble.into());
        self.own.rumble = self.rumble.clone();
        self
    }

    /// Name with region, revision and dump tags removed.
    pub fn base_name(&self) -> &str {
        crate::title::base_name(&self.display_name)
    }

    /// Title of the game page this record belongs to.
    pub fn canonical_title(&self) -> String {
        crate::title::canonical_title(&self.display_name)
    }
}

/// All records of one database file, in file order, indexed by hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomDatabase {
    records: Vec<RomRecord>,
    by_hash: HashMap<String, usize>,
}

impl RomDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end of the database.
    ///
    /// Returns the record back if its hash is already present; the existing
    /// entry is left untouched.
    pub fn insert(&mut self, record: RomRecord) -> Result<(), RomRecord> {
        if self.by_hash.contains_key(&record.hash) {
            return Err(record);
        }
        self.by_hash.insert(record.hash.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Build a database from records, keeping the first of any duplicate
    /// hashes. Dropped duplicates are logged as warnings.
    pub fn from_records(records: impl IntoIterator<Item = RomRecord>) -> Self {
        let mut db = Self::new();
        for record in records {
            if let Err(dup) = db.insert(record) {
                log::warn!(
                    "Dropping duplicate entry [{}] ({})",
                    dup.hash,
                    dup.display_name
                );
            }
        }
        db
    }

    pub fn get(&self, hash: &str) -> Option<&RomRecord> {
        self.by_hash.get(hash).map(|&i| &self.records[i])
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.by_hash.contains_key(hash)
    }

    /// Records in the order they appeared in the file.
    pub fn iter(&self) -> std::slice::Iter<'_, RomRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RomDatabase {
    type Item = &'a RomRecord;
    type IntoIter = std::slice::Iter<'a, RomRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
