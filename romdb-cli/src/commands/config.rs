use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romdb_core::Settings;
use romdb_core::settings::{load_settings_string, settings_path};

pub(crate) fn run_config_show(settings: &Settings) {
    let path = settings_path();
    log::info!(
        "{} {}",
        "Settings file:".if_supports_color(Stdout, |t| t.bold()),
        path.display(),
    );

    match load_settings_string() {
        Some(contents) => {
            log::info!("");
            for line in contents.lines() {
                log::info!("  {line}");
            }
        }
        None => log::info!(
            "{}",
            "  (not present, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    log::info!("");
    log::info!("{}", "Effective values:".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  database: {}", settings.database_path(None).display());
    log::info!("  out:      {}", settings.out_dir(None).display());
    log::info!("  dialect:  {}", settings.dialect(None));
    log::info!("  art_url:  {}", settings.art_url(None));
}

pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
