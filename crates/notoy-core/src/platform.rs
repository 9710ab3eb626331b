//! Host capabilities the core depends on besides the bookmark store:
//! which browser we run in, today's date and the active UI locale.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Chrome,
    Edge,
    Firefox,
}

impl Platform {
    /// Well-known id of the bookmark tree root
    pub fn root_id(&self) -> NodeId {
        match self {
            Platform::Chrome | Platform::Edge => NodeId::from("0"),
            Platform::Firefox => NodeId::from("root________"),
        }
    }
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Today as `YYYY-MM-DD`
    fn date_string(&self) -> String {
        let today = self.today();
        format!("{:04}-{:02}-{:02}", today.year(), today.month(), today.day())
    }
}

/// Local wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub trait Locale: Send + Sync {
    /// UI language tag, e.g. `en-US`
    fn current_locale(&self) -> String;

    /// Label printed in front of the keyword line of a note
    fn keywords_label(&self) -> &'static str {
        keywords_label(&self.current_locale())
    }
}

/// Locale taken from the process environment (`LC_ALL`, `LC_MESSAGES`, `LANG`)
pub struct SystemLocale;

impl Locale for SystemLocale {
    fn current_locale(&self) -> String {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .map(|value| language_tag(&value))
            .unwrap_or_else(|| "en".to_string())
    }
}

pub struct FixedLocale(pub String);

impl Locale for FixedLocale {
    fn current_locale(&self) -> String {
        self.0.clone()
    }
}

/// "de_DE.UTF-8" -> "de-DE"
fn language_tag(posix: &str) -> String {
    let tag = posix.split(['.', '@']).next().unwrap_or(posix);
    tag.replace('_', "-")
}

pub fn keywords_label(locale: &str) -> &'static str {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "de" => "Schlüsselwörter:",
        "fr" => "Mots-clés :",
        "es" => "Palabras clave:",
        _ => "Keywords:",
    }
}
