//! Copy shared settings from referenced records (`RefMD5`).

use crate::record::RomDatabase;

/// Produce a resolved copy of `db`.
///
/// Every record with a `RefMD5` that names another record gets that record's
/// status, players, save type and rumble values. Values are always the
/// target's own section values, so a reference to a record that is itself a
/// reference gets the intermediate record's own (usually empty) fields, and
/// resolving an already-resolved database changes nothing. Unresolvable
/// references leave the record's effective values as they are.
pub fn resolve_references(db: &RomDatabase) -> RomDatabase {
    let mut unresolved = 0usize;
    let resolved = db.iter().map(|record| match record.ref_hash.as_deref() {
        Some(ref_hash) => match db.get(ref_hash) {
            Some(target) => record.with_effective(target.own()),
            None => {
                log::warn!(
                    "{} [{}] references unknown entry [{}]",
                    record.display_name,
                    record.hash,
                    ref_hash
                );
                unresolved += 1;
                record.clone()
            }
        },
        None => record.clone(),
    });
    let out = RomDatabase::from_records(resolved.collect::<Vec<_>>());
    if unresolved > 0 {
        log::debug!("{unresolved} references could not be resolved");
    }
    out
}
