use crate::aggregate::GamePages;
use crate::record::RomDatabase;

/// Summary counts for a loaded database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseStats {
    pub records: usize,
    pub pages: usize,
    /// Records with a `RefMD5`
    pub references: usize,
    /// `RefMD5` values that name no record
    pub unresolved: usize,
}

impl DatabaseStats {
    pub fn collect(db: &RomDatabase, pages: &GamePages) -> Self {
        let mut stats = Self {
            records: db.len(),
            pages: pages.len(),
            ..Self::default()
        };
        for ref_hash in db.iter().filter_map(|r| r.ref_hash.as_deref()) {
            stats.references += 1;
            if !db.contains(ref_hash) {
                stats.unresolved += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_pages;
    use crate::record::RomRecord;

    #[test]
    fn test_collect() {
        let db = RomDatabase::from_records(vec![
            RomRecord::new("A", "Quest (USA)"),
            RomRecord::new("B", "Quest (Europe)").with_ref("A"),
            RomRecord::new("C", "Other (USA)").with_ref("ZZ"),
        ]);
        let stats = DatabaseStats::collect(&db, &aggregate_pages(&db));
        assert_eq!(
            stats,
            DatabaseStats {
                records: 3,
                pages: 2,
                references: 2,
                unresolved: 1,
            }
        );
    }
}
