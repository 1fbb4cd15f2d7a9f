use crate::aggregate::{GamePage, GamePages};
use crate::render::markdown::split_version;
use crate::render::{PAGE_SECTIONS, PageRenderer, index_columns};

/// MediaWiki markup with a sortable wikitable index.
pub struct MediaWikiRenderer {
    art_base: String,
}

impl MediaWikiRenderer {
    pub fn new(art_base: impl Into<String>) -> Self {
        Self {
            art_base: art_base.into(),
        }
    }
}

impl Default for MediaWikiRenderer {
    fn default() -> Self {
        Self::new(crate::title::DEFAULT_ART_URL)
    }
}

impl PageRenderer for MediaWikiRenderer {
    fn name(&self) -> &'static str {
        "MediaWiki"
    }

    fn file_extension(&self) -> &'static str {
        "wiki"
    }

    fn index_title(&self) -> &'static str {
        "AllGames"
    }

    fn render_page(&self, page: &GamePage) -> String {
        let mut wiki = String::new();
        wiki.push_str(&format!("[{} Cover art]\n\n", page.cover_art_url(&self.art_base)));
        for section in PAGE_SECTIONS {
            wiki.push_str(&format!("== {section} ==\n\n"));
        }
        for rom in page.members_by_name() {
            wiki.push_str(&format!(
                "* <code>{}  {}</code>\n",
                escape_nowiki(&rom.display_name),
                rom.hash
            ));
        }
        wiki
    }

    fn render_index(&self, pages: &GamePages) -> String {
        let mut wiki = String::new();
        wiki.push_str("== Games ==\n\n");
        wiki.push_str("{| class=\"wikitable sortable\"\n");
        wiki.push_str("! Name !! Status !! Players !! Rumble !! SaveType\n");
        for page in pages.sorted_by_title() {
            let [status, players, rumble, save_type] = index_columns(page.first());
            wiki.push_str("|-\n");
            wiki.push_str(&format!(
                "| [[{}|{}]] || {} || {} || {} || {}\n",
                page.link_token(),
                page.title,
                status,
                players,
                rumble,
                save_type
            ));
        }
        wiki.push_str("|}\n");
        wiki
    }

    fn known_versions(&self, body: &str) -> Vec<(String, String)> {
        body.lines()
            .skip_while(|line| *line != "== Known Versions ==")
            .filter_map(|line| {
                let inner = line.strip_prefix("* <code>")?.strip_suffix("</code>")?;
                let (name, hash) = split_version(inner)?;
                Some((unescape_nowiki(&name), hash))
            })
            .collect()
    }
}

/// Escape the characters that would end a `<code>` span early.
fn escape_nowiki(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;")
}

fn unescape_nowiki(s: &str) -> String {
    s.replace("&lt;", "<").replace("&amp;", "&")
}
