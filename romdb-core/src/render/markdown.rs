use crate::aggregate::{GamePage, GamePages};
use crate::render::{PAGE_SECTIONS, PageRenderer, index_columns};

/// GitHub-wiki flavoured Markdown.
pub struct MarkdownRenderer {
    art_base: String,
}

impl MarkdownRenderer {
    pub fn new(art_base: impl Into<String>) -> Self {
        Self {
            art_base: art_base.into(),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(crate::title::DEFAULT_ART_URL)
    }
}

impl PageRenderer for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "Markdown"
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn index_title(&self) -> &'static str {
        "Home"
    }

    fn render_page(&self, page: &GamePage) -> String {
        let mut md = String::new();
        md.push_str(&format!("![]({})\n\n", page.cover_art_url(&self.art_base)));
        for section in PAGE_SECTIONS {
            md.push_str("## ");
            md.push_str(section);
            md.push_str("\n\n");
        }
        for rom in page.members_by_name() {
            md.push_str("- ");
            md.push_str(&code_span(&format!("{}  {}", rom.display_name, rom.hash)));
            md.push('\n');
        }
        md
    }

    fn render_index(&self, pages: &GamePages) -> String {
        let mut md = String::new();
        md.push_str("## Games\n\n");
        md.push_str("Name | Status | Players | Rumble | SaveType\n");
        md.push_str("-----|--------|---------|--------|---------\n");
        for page in pages.sorted_by_title() {
            let [status, players, rumble, save_type] = index_columns(page.first());
            md.push_str(&format!(
                "[{}]({}) | {} | {} | {} | {}\n",
                escape_inline(&page.title),
                page.link_token(),
                escape_inline(status),
                escape_inline(players),
                escape_inline(rumble),
                escape_inline(save_type)
            ));
        }
        md
    }

    fn known_versions(&self, body: &str) -> Vec<(String, String)> {
        body.lines()
            .skip_while(|line| *line != "## Known Versions")
            .filter_map(|line| {
                let inner = parse_code_span(line.strip_prefix("- ")?)?;
                split_version(inner)
            })
            .collect()
    }
}

/// Split `name  hash` on the last double space.
pub(crate) fn split_version(line: &str) -> Option<(String, String)> {
    let (name, hash) = line.rsplit_once("  ")?;
    Some((name.to_string(), hash.to_string()))
}

/// Wrap `text` in a code span whose fence is longer than any backtick run
/// inside it. Fences longer than one backtick are padded with a space.
fn code_span(text: &str) -> String {
    let fence = "`".repeat(longest_backtick_run(text) + 1);
    if fence.len() > 1 {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

/// Contents of a code span written by [`code_span`].
fn parse_code_span(span: &str) -> Option<&str> {
    let n = span.len() - span.trim_start_matches('`').len();
    if n == 0 {
        return None;
    }
    let fence = &span[..n];
    let inner = span[n..].strip_suffix(fence)?;
    if n > 1 {
        inner.strip_prefix(' ')?.strip_suffix(' ')
    } else {
        Some(inner)
    }
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c| c != '`').map(str::len).max().unwrap_or(0)
}

/// Backslash-escape characters that end link text or a table cell.
fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']' | '|' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
