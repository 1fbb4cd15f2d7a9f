//! Title normalization for grouping and linking ROM records.
//!
//! GoodName values follow the GoodN64 convention of a plain title followed
//! by tags:
//! ```text
//! Super Game (USA) (Rev A) [!]
//! ```
//! Everything from the first ` (` or ` [` is a tag. Kiosk demo cartridges
//! keep a `(Kiosk Demo)` suffix so they get a page of their own.

const KIOSK_MARKER: &str = "(Kiosk";
const KIOSK_SUFFIX: &str = " (Kiosk Demo)";

/// Default location of the cover-art images referenced by game pages.
pub const DEFAULT_ART_URL: &str = "http://paulscode.com/downloads/Mupen64Plus-AE/CoverArt/";

/// Strip region, revision and dump tags from a display name.
///
/// ```
/// use romdb_core::title::base_name;
///
/// assert_eq!(base_name("Super Game (USA) (Rev A)"), "Super Game");
/// assert_eq!(base_name("Other Game [T+Spa]"), "Other Game");
/// ```
pub fn base_name(display_name: &str) -> &str {
    let end = [" (", " ["]
        .iter()
        .filter_map(|sep| display_name.find(sep))
        .min()
        .unwrap_or(display_name.len());
    display_name[..end].trim_end()
}

/// Title used to group records into game pages.
///
/// This is the base name, plus ` (Kiosk Demo)` for kiosk cartridges.
pub fn canonical_title(display_name: &str) -> String {
    let mut title = base_name(display_name).to_string();
    if display_name.contains(KIOSK_MARKER) {
        title.push_str(KIOSK_SUFFIX);
    }
    title
}

/// Page-link form of a canonical title.
///
/// Whitespace runs become `-`, apostrophes and periods are dropped, and
/// every byte outside `A-Z a-z 0-9 ! ' ( ) * - . _ ~` is written as `%XX`.
pub fn link_token(title: &str) -> String {
    let hyphenated = collapse_runs(title, char::is_whitespace, '-');
    let mut token = String::with_capacity(hyphenated.len());
    for c in hyphenated.chars().filter(|c| !is_stripped(*c)) {
        if is_unescaped(c) {
            token.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                token.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    token
}

/// Cover-art image file name for a canonical title.
///
/// Apostrophes and periods are dropped, each run of non-word characters
/// becomes `_`, and `.png` is appended.
pub fn cover_art_name(title: &str) -> String {
    let stripped: String = title.chars().filter(|c| !is_stripped(*c)).collect();
    let mut name = collapse_runs(&stripped, |c| !is_word_char(c), '_');
    name.push_str(".png");
    name
}

/// Full cover-art URL under `base`.
pub fn cover_art_url(base: &str, title: &str) -> String {
    let name = cover_art_name(title);
    if base.is_empty() || base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}

fn is_stripped(c: char) -> bool {
    c == '\'' || c == '.'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_unescaped(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '!' | '\'' | '(' | ')' | '*' | '-' | '.' | '_' | '~')
}

/// Replace each maximal run of characters matching `pred` with `with`.
fn collapse_runs(s: &str, pred: impl Fn(char) -> bool, with: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if pred(c) {
            if !in_run {
                out.push(with);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
