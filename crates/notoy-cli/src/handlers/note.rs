use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use log::info;
use notoy_core::platform::{FixedLocale, Locale, SystemClock, SystemLocale};
use notoy_core::{file_name, DocumentFormat, NoteFormatter, NoteRecord, NotoyConfig};

use crate::cli::{NoteArgs, PreviewArgs};

/// Locale from the config, or from the environment
fn active_locale(config: &NotoyConfig) -> Box<dyn Locale> {
    match &config.notes.locale {
        Some(locale) => Box::new(FixedLocale(locale.clone())),
        None => Box::new(SystemLocale),
    }
}

/// Fill a note from the command line, falling back to the configured
/// options and the extension's defaults.
pub fn note_from_args(config: &NotoyConfig, args: &NoteArgs) -> NoteRecord {
    let defaults = NoteRecord::default();
    NoteRecord {
        url: args.url.clone().unwrap_or(defaults.url),
        title: args.title.clone().unwrap_or(defaults.title),
        keywords: args.keywords.clone().unwrap_or(defaults.keywords),
        description: args.description.clone().unwrap_or(defaults.description),
        text: args.text.clone().unwrap_or(defaults.text),
        add_timestamp: args.timestamp.unwrap_or(config.notes.add_timestamp),
        add_yaml: args.yaml.unwrap_or(config.notes.add_yaml),
        format: args
            .format
            .map(DocumentFormat::from)
            .unwrap_or(config.notes.format),
    }
}

/// Handle `notoy note ...`: render a note and save it under its title,
/// or print it with `--stdout`. Prints the path of the saved file.
pub fn handle_note(config: &NotoyConfig, args: NoteArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let note = note_from_args(config, &args);
    let locale = active_locale(config);
    let formatter = NoteFormatter::new(&SystemClock, locale.as_ref());
    let document = formatter.render(&note);

    if args.stdout {
        out.write_all(document.as_bytes())?;
        return Ok(());
    }

    let path: PathBuf = args.out.join(file_name(&note.title, note.format));
    std::fs::write(&path, &document).with_context(|| format!("Failed to write note {:?}", path))?;
    info!(
        "Saved {} note as {:?}",
        note.format.file_info().mime,
        path
    );
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// Handle `notoy preview`: the sample note of the options page
pub fn handle_preview(
    config: &NotoyConfig,
    args: PreviewArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let note = NoteRecord::preview(
        args.format
            .map(DocumentFormat::from)
            .unwrap_or(config.notes.format),
        args.timestamp.unwrap_or(config.notes.add_timestamp),
        args.yaml.unwrap_or(config.notes.add_yaml),
    );
    let locale = active_locale(config);
    let formatter = NoteFormatter::new(&SystemClock, locale.as_ref());
    out.write_all(formatter.render(&note).as_bytes())?;
    Ok(())
}
