use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romdb_core::{Document, DocumentKind, RomDbProgress, Settings, load_pages, render_site};

use crate::cli_types::WikiArgs;
use crate::error::CliError;

pub(crate) fn run_wiki(
    settings: &Settings,
    database: PathBuf,
    args: WikiArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let out_dir = settings.out_dir(args.out);
    let dialect = settings.dialect(args.dialect);
    let renderer = dialect.renderer(settings.art_url(args.art_url));

    log::info!(
        "Loading {}",
        database.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let (_, pages) = load_pages(&database)?;
    log::info!(
        "Rendering {} games as {}",
        pages.len(),
        renderer.name().if_supports_color(Stdout, |t| t.bold()),
    );

    let pb = if quiet {
        ProgressBar::with_draw_target(Some(pages.len() as u64 + 1), ProgressDrawTarget::hidden())
    } else {
        ProgressBar::new(pages.len() as u64 + 1)
    };
    pb.set_style(
        ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {wide_msg}")
            .expect("static pattern")
            .progress_chars("=> "),
    );

    let docs = render_site(&pages, renderer.as_ref(), &|event| match event {
        RomDbProgress::PageRendered { title, current, .. } => {
            log::debug!("{title}");
            pb.set_position(current as u64);
            pb.set_message(title);
        }
        RomDbProgress::IndexRendered { .. } => pb.inc(1),
        _ => {}
    });
    pb.finish_and_clear();

    if args.dry_run {
        log::info!(
            "{}",
            format!("Dry run: would write to {}", out_dir.display())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        for doc in &docs {
            log::info!(
                "  {}",
                document_file_name(&doc.title, renderer.file_extension())
            );
        }
    } else {
        let written = write_documents(&docs, &out_dir, renderer.file_extension())?;
        let game_pages = docs
            .iter()
            .filter(|doc| doc.kind == DocumentKind::Game)
            .count();
        log::info!(
            "Wrote {} files ({} game pages + {}) to {}",
            written.len(),
            game_pages,
            renderer.index_title(),
            out_dir.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    log::info!("");
    log::info!(
        "{}",
        format!("Finished generating {} games.", pages.len())
            .if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

/// Write each document to `<out_dir>/<title>.<ext>`, creating `out_dir`.
///
/// Titles that map to the same file name are warned about; the later
/// document replaces the earlier one. Returns each distinct path written.
fn write_documents(docs: &[Document], out_dir: &Path, ext: &str) -> Result<Vec<PathBuf>, CliError> {
    fs::create_dir_all(out_dir)?;
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut written = Vec::with_capacity(docs.len());
    for doc in docs {
        let file_name = document_file_name(&doc.title, ext);
        let path = out_dir.join(&file_name);
        match owners.insert(file_name.clone(), &doc.title) {
            Some(previous) => log::warn!(
                "\"{}\" overwrites \"{}\" ({})",
                doc.title,
                previous,
                file_name
            ),
            None => written.push(path.clone()),
        }
        fs::write(&path, &doc.body)?;
        log::debug!("Wrote {}", path.display());
    }
    Ok(written)
}

/// File name for a document title. Path separators become `-`.
fn document_file_name(title: &str, ext: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    format!("{stem}.{ext}")
}
