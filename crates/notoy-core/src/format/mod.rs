//! Rendering of captured page notes as Markdown, Org-mode or plain text.
//!
//! All renderers are pure: the output only depends on the record, today's
//! date and the active locale.

use crate::model::{DocumentFormat, NoteRecord};
use crate::platform::{Clock, Locale};
use crate::utils::sanitize_file_stem;

mod keywords;


pub use keywords::{orgify_keywords, tagify_keywords, yaml_keywords};

pub struct NoteFormatter<'a> {
    clock: &'a dyn Clock,
    locale: &'a dyn Locale,
}

impl<'a> NoteFormatter<'a> {
    pub fn new(clock: &'a dyn Clock, locale: &'a dyn Locale) -> Self {
        Self { clock, locale }
    }

    /// Render in the record's own format
    pub fn render(&self, note: &NoteRecord) -> String {
        match note.format {
            DocumentFormat::Markdown => self.markdown(note),
            DocumentFormat::OrgMode => self.org_mode(note),
            DocumentFormat::PlainText => self.plain_text(note),
        }
    }

    pub fn markdown(&self, note: &NoteRecord) -> String {
        format!(
            "{yaml}# {title}\n\n{timestamp}{label} {keywords}\n\n{description}\n[{title}]({url})\n\n{text}\n",
            yaml = self.yaml_front_matter(note),
            title = note.title,
            timestamp = self.timestamp(note.add_timestamp),
            label = self.locale.keywords_label(),
            keywords = tagify_keywords(&note.keywords),
            description = note.description,
            url = note.url,
            text = note.text,
        )
    }

    /// `add_yaml` is ignored, Org-mode has its own header
    pub fn org_mode(&self, note: &NoteRecord) -> String {
        format!(
            "#+title:  {title}\n#+date:   {date}\n#+FILETAGS: {tags}\n\n* {title}\n\n{timestamp}{label} {keywords}\n\n{description}\n[[{url}][{title}]]\n\n{text}\n",
            title = note.title,
            date = self.clock.date_string(),
            tags = orgify_keywords(&note.keywords),
            timestamp = self.timestamp(note.add_timestamp),
            label = self.locale.keywords_label(),
            keywords = note.keywords,
            description = note.description,
            url = note.url,
            text = note.text,
        )
    }

    pub fn plain_text(&self, note: &NoteRecord) -> String {
        format!(
            "{yaml}{title}\n\n{timestamp}{label} {keywords}\n\n{description}\n{url}\n\n{text}\n",
            yaml = self.yaml_front_matter(note),
            title = note.title,
            timestamp = self.timestamp(note.add_timestamp),
            label = self.locale.keywords_label(),
            keywords = note.keywords,
            description = note.description,
            url = note.url,
            text = note.text,
        )
    }

    /// Today's date followed by a blank line, or nothing
    pub fn timestamp(&self, add_timestamp: bool) -> String {
        if add_timestamp {
            format!("{}\n\n", self.clock.date_string())
        } else {
            String::new()
        }
    }

    /// Front matter block followed by a blank line, or nothing.
    ///
    /// The title is written as is between double quotes.
    pub fn yaml_front_matter(&self, note: &NoteRecord) -> String {
        if !note.add_yaml {
            return String::new();
        }
        format!(
            "---\ntitle: \"{}\"\nauthor:\n  -\nkeywords: {}\nlang: {}\n---\n\n",
            note.title,
            yaml_keywords(&note.keywords),
            self.locale.current_locale(),
        )
    }
}

/// Name to save a note under: non-letters in the title become `_`.
pub fn file_name(title: &str, format: DocumentFormat) -> String {
    format!("{}{}", sanitize_file_stem(title), format.file_info().suffix)
}
