use super::*;

const SAMPLE_INI: &str = "\
; mupen64plus ROM database
[0A8B96E4ED6A2B3E8E8A4DF42AF11F33]
GoodName=Super Game (USA) (Rev A)
CRC=12345678 9ABCDEF0
Players=2
SaveType=Eeprom 4KB
Status=3
Rumble=Yes

[5DBE4F07D8E4E8DB1CE85B3DF2DF8CBE]
GoodName=Super Game (Europe)
CRC=ABCDEF01 23456789
RefMD5=0A8B96E4ED6A2B3E8E8A4DF42AF11F33
";

#[test]
fn test_parse_sections() {
    let db = parse_database(SAMPLE_INI.as_bytes()).unwrap();
    assert_eq!(db.len(), 2);

    let usa = db.get("0A8B96E4ED6A2B3E8E8A4DF42AF11F33").unwrap();
    assert_eq!(usa.display_name, "Super Game (USA) (Rev A)");
    assert_eq!(usa.crc.as_deref(), Some("12345678 9ABCDEF0"));
    assert_eq!(usa.players.as_deref(), Some("2"));
    assert_eq!(usa.save_type.as_deref(), Some("Eeprom 4KB"));
    assert_eq!(usa.status.as_deref(), Some("3"));
    assert_eq!(usa.rumble.as_deref(), Some("Yes"));
    assert_eq!(usa.ref_hash, None);

    let eur = db.get("5DBE4F07D8E4E8DB1CE85B3DF2DF8CBE").unwrap();
    assert_eq!(
        eur.ref_hash.as_deref(),
        Some("0A8B96E4ED6A2B3E8E8A4DF42AF11F33")
    );
    assert_eq!(eur.status, None);
}

#[test]
fn test_parse_keeps_file_order() {
    let db = parse_database(SAMPLE_INI.as_bytes()).unwrap();
    let names: Vec<_> = db.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Super Game (USA) (Rev A)", "Super Game (Europe)"]);
}

#[test]
fn test_lines_before_first_header_are_dropped() {
    let ini = "GoodName=Orphan\nStatus=1\n[AA]\nGoodName=Real\n";
    let db = parse_database(ini.as_bytes()).unwrap();
    assert_eq!(db.len(), 1);
    assert_eq!(db.get("AA").unwrap().display_name, "Real");
    assert_eq!(db.get("AA").unwrap().status, None);
}

#[test]
fn test_malformed_header_is_not_a_section() {
    let ini = "[AA]\nGoodName=First\n[not hex]\nStatus=4\n[ZZ]\n";
    let db = parse_database(ini.as_bytes()).unwrap();
    assert_eq!(db.len(), 1);
    // Keys after a malformed header still belong to the open section
    assert_eq!(db.get("AA").unwrap().status.as_deref(), Some("4"));
}

#[test]
fn test_repeated_key_last_wins() {
    let ini = "[AA]\nGoodName=Old\nGoodName=New\n";
    let db = parse_database(ini.as_bytes()).unwrap();
    assert_eq!(db.get("AA").unwrap().display_name, "New");
}

#[test]
fn test_unknown_and_empty_keys_ignored() {
    let ini = "[AA]\nGoodName=Game\nMempak=Yes\nStatus=\nCountPerOp=1\n";
    let db = parse_database(ini.as_bytes()).unwrap();
    let rec = db.get("AA").unwrap();
    assert_eq!(rec.status, None);
}

#[test]
fn test_duplicate_hash_rejected() {
    let ini = "[AA]\nGoodName=One\n[BB]\nGoodName=Two\n[AA]\nGoodName=Three\n";
    let err = parse_database(ini.as_bytes()).unwrap_err();
    match err {
        RomDbError::DuplicateKey { hash, line } => {
            assert_eq!(hash, "AA");
            assert_eq!(line, 5);
        }
        other => panic!("expected DuplicateKey, got {other:?}"),
    }
}

#[test]
fn test_missing_good_name_rejected() {
    let ini = "[AA]\nStatus=1\n";
    let err = parse_database(ini.as_bytes()).unwrap_err();
    assert!(matches!(err, RomDbError::MissingName { ref hash } if hash == "AA"));
}

#[test]
fn test_empty_input() {
    let db = parse_database("".as_bytes()).unwrap();
    assert!(db.is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let ini = "[AA]\r\nGoodName=Game (USA)\r\nPlayers=4\r\n";
    let db = parse_database(ini.as_bytes()).unwrap();
    let rec = db.get("AA").unwrap();
    assert_eq!(rec.display_name, "Game (USA)");
    assert_eq!(rec.players.as_deref(), Some("4"));
}

#[test]
fn test_invalid_utf8_is_replaced() {
    // Latin-1 "é" in a name
    let ini: &[u8] = b"[AA]\nGoodName=Pok\xE9mon Stadium (Europe)\nStatus=3\n[BB]\nGoodName=Next (USA)\n";
    let db = parse_database(ini).unwrap();
    assert_eq!(db.len(), 2);
    let rec = db.get("AA").unwrap();
    assert_eq!(rec.display_name, "Pok\u{FFFD}mon Stadium (Europe)");
    assert_eq!(rec.status.as_deref(), Some("3"));
}

#[test]
fn test_no_trailing_newline() {
    let db = parse_database("[AA]\nGoodName=Game (USA)".as_bytes()).unwrap();
    assert_eq!(db.get("AA").unwrap().display_name, "Game (USA)");
}

#[test]
fn test_own_values_match_parsed() {
    let db = parse_database(SAMPLE_INI.as_bytes()).unwrap();
    let rec = db.get("0A8B96E4ED6A2B3E8E8A4DF42AF11F33").unwrap();
    assert_eq!(rec.own().status.as_deref(), Some("3"));
    assert_eq!(rec.own().players, rec.players);
}

#[test]
fn test_parse_header() {
    assert_eq!(parse_header("[0a1B]"), Some("0a1B"));
    assert_eq!(parse_header("[]"), None);
    assert_eq!(parse_header("[0A1G]"), None);
    assert_eq!(parse_header(" [0A]"), None);
    assert_eq!(parse_header("[0A] "), None);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_database_file(&dir.path().join("missing.ini")).unwrap_err();
    assert!(matches!(err, RomDbError::Io(_)));
}
