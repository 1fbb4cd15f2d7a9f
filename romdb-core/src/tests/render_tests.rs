use std::cell::RefCell;

use super::*;
use crate::aggregate::aggregate_pages;
use crate::record::{RomDatabase, RomRecord};

fn sample_pages() -> GamePages {
    let db = RomDatabase::from_records(vec![
        RomRecord::new("AA11", "Quest (USA)")
            .with_status("3")
            .with_players("2")
            .with_rumble("Yes")
            .with_save_type("SRAM"),
        RomRecord::new("BB22", "Foo's Adventure! (Europe)").with_status("1"),
        RomRecord::new("CC33", "Quest (Europe)").with_status("4"),
        RomRecord::new("DD44", "Quest (Beta)"),
    ]);
    aggregate_pages(&db)
}

#[test]
fn test_markdown_page_layout() {
    let pages = sample_pages();
    let renderer = MarkdownRenderer::new("http://art.example/");
    let body = renderer.render_page(pages.get("Quest").unwrap());
    let expected = "\
![](http://art.example/Quest.png)

## Recommended Settings

## Known Issues

## Known Versions

- `Quest (Beta)  DD44`
- `Quest (Europe)  CC33`
- `Quest (USA)  AA11`
";
    assert_eq!(body, expected);
}

#[test]
fn test_markdown_index_layout() {
    let pages = sample_pages();
    let body = MarkdownRenderer::default().render_index(&pages);
    let expected = "\
## Games

Name | Status | Players | Rumble | SaveType
-----|--------|---------|--------|---------
[Foo's Adventure!](Foos-Adventure!) | 1 | Unknown | Unknown | Unknown
[Quest](Quest) | 3 | 2 | Yes | SRAM
";
    assert_eq!(body, expected);
}

#[test]
fn test_index_uses_first_member_not_alphabetical() {
    // "Quest (Beta)" sorts first by name but "Quest (USA)" was seen first
    let pages = sample_pages();
    let body = MarkdownRenderer::default().render_index(&pages);
    assert!(body.contains("[Quest](Quest) | 3 |"));
}

#[test]
fn test_mediawiki_page_layout() {
    let pages = sample_pages();
    let renderer = MediaWikiRenderer::new("http://art.example/");
    let body = renderer.render_page(pages.get("Quest").unwrap());
    assert!(body.starts_with("[http://art.example/Quest.png Cover art]\n"));
    assert!(body.contains("== Recommended Settings ==\n"));
    assert!(body.contains("== Known Issues ==\n"));
    assert!(body.contains("== Known Versions ==\n"));
    assert!(body.contains("* <code>Quest (USA)  AA11</code>\n"));
}

#[test]
fn test_mediawiki_index_layout() {
    let pages = sample_pages();
    let body = MediaWikiRenderer::default().render_index(&pages);
    assert!(body.starts_with("== Games ==\n\n{| class=\"wikitable sortable\"\n"));
    assert!(body.contains("| [[Foos-Adventure!|Foo's Adventure!]] || 1 || Unknown || Unknown || Unknown\n"));
    assert!(body.contains("| [[Quest|Quest]] || 3 || 2 || Yes || SRAM\n"));
    assert!(body.ends_with("|}\n"));
    let foo = body.find("Foos-Adventure").unwrap();
    let quest = body.find("[[Quest").unwrap();
    assert!(foo < quest);
}

#[test]
fn test_known_versions_round_trip() {
    let pages = sample_pages();
    let renderers: [Box<dyn PageRenderer>; 2] = [
        Box::new(MarkdownRenderer::default()),
        Box::new(MediaWikiRenderer::default()),
    ];
    for renderer in &renderers {
        let page = pages.get("Quest").unwrap();
        let body = renderer.render_page(page);
        let expected: Vec<(String, String)> = page
            .members_by_name()
            .iter()
            .map(|r| (r.display_name.clone(), r.hash.clone()))
            .collect();
        assert_eq!(renderer.known_versions(&body), expected, "{}", renderer.name());
    }
}

#[test]
fn test_mediawiki_escapes_code_span() {
    let db = RomDatabase::from_records(vec![RomRecord::new("AA", "A <B> & C (USA)")]);
    let pages = aggregate_pages(&db);
    let renderer = MediaWikiRenderer::default();
    let body = renderer.render_page(pages.get("A <B> & C").unwrap());
    assert!(body.contains("<code>A &lt;B> &amp; C (USA)  AA</code>"));
    assert_eq!(
        renderer.known_versions(&body),
        vec![("A <B> & C (USA)".to_string(), "AA".to_string())]
    );
}

#[test]
fn test_markdown_escapes_backticks_and_table_cells() {
    let db = RomDatabase::from_records(vec![
        RomRecord::new("AA", "Tick`Tock (USA)").with_status("2|3"),
        RomRecord::new("BB", "Odd[Cart] (Japan)"),
    ]);
    let pages = aggregate_pages(&db);
    let renderer = MarkdownRenderer::default();

    let body = renderer.render_page(pages.get("Tick`Tock").unwrap());
    assert!(body.contains("- `` Tick`Tock (USA)  AA ``\n"));
    assert_eq!(
        renderer.known_versions(&body),
        vec![("Tick`Tock (USA)".to_string(), "AA".to_string())]
    );

    let index = renderer.render_index(&pages);
    assert!(index.contains("[Tick\\`Tock](Tick%60Tock) | 2\\|3 | Unknown"));
    assert!(index.contains("[Odd\\[Cart\\]](Odd%5BCart%5D) | Unknown"));
}

#[test]
fn test_render_site_documents_and_progress() {
    let pages = sample_pages();
    let events = RefCell::new(Vec::new());
    let docs = render_site(&pages, &MarkdownRenderer::default(), &|p| {
        events.borrow_mut().push(p)
    });

    let titles: Vec<_> = docs.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Quest", "Foo's Adventure!", "Home"]);
    assert_eq!(docs[2].kind, DocumentKind::Index);
    assert!(docs[..2].iter().all(|d| d.kind == DocumentKind::Game));

    let events = events.into_inner();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        RomDbProgress::PageRendered {
            title: "Quest".to_string(),
            current: 1,
            total: 2,
        }
    );
    assert_eq!(events[2], RomDbProgress::IndexRendered { pages: 2 });
}

#[test]
fn test_dialect_selection() {
    assert_eq!("markdown".parse::<Dialect>(), Ok(Dialect::Markdown));
    assert_eq!("MediaWiki".parse::<Dialect>(), Ok(Dialect::MediaWiki));
    assert_eq!("wiki".parse::<Dialect>(), Ok(Dialect::MediaWiki));
    assert!("html".parse::<Dialect>().is_err());

    let renderer = Dialect::MediaWiki.renderer("");
    assert_eq!(renderer.index_title(), "AllGames");
    assert_eq!(renderer.file_extension(), "wiki");
    let renderer = Dialect::Markdown.renderer("");
    assert_eq!(renderer.index_title(), "Home");
    assert_eq!(renderer.file_extension(), "md");
}
