//! Command line definitions for Notoy.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use notoy_core::model::DocumentFormat;
use notoy_core::platform::Platform;

/// Notoy CLI.
#[derive(Parser)]
#[command(name = "notoy")]
#[command(about = "Walk your bookmarks and save pages as notes")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "notoy.yaml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Visit the bookmarks of an exported bookmark tree one by one
    Bookmarks(BookmarksArgs),

    /// Render a page note and save it
    Note(NoteArgs),

    /// Print the sample note for the given options
    Preview(PreviewArgs),
}

#[derive(Args)]
pub struct BookmarksArgs {
    /// Bookmark tree JSON, as returned by `bookmarks.getTree()`
    #[arg(long)]
    pub tree: PathBuf,

    /// File keeping the current bookmark between runs
    #[arg(long, default_value = ".notoy-session")]
    pub session: PathBuf,

    /// Browser the tree comes from, decides the root id
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,

    #[command(subcommand)]
    pub action: BookmarkAction,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum BookmarkAction {
    /// Show the current bookmark
    Show,
    /// Move on to the next bookmark
    Next,
    /// Delete the current bookmark and show the next one
    Delete,
    /// Jump to a bookmark or folder
    Select {
        /// Bookmark or folder id
        id: String,
    },
    /// List the siblings of the current bookmark
    Siblings,
    /// Print the URL of the current bookmark
    Url,
}

#[derive(Args, Default)]
pub struct NoteArgs {
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Comma separated keywords
    #[arg(long)]
    pub keywords: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub text: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Add today's date
    #[arg(long)]
    pub timestamp: Option<bool>,

    /// Add a YAML front matter block
    #[arg(long)]
    pub yaml: Option<bool>,

    /// Directory to save the note in
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Print the note instead of saving it
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args, Default)]
pub struct PreviewArgs {
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    #[arg(long)]
    pub timestamp: Option<bool>,

    #[arg(long)]
    pub yaml: Option<bool>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Chrome,
    Edge,
    Firefox,
}

impl From<PlatformArg> for Platform {
    fn from(value: PlatformArg) -> Self {
        match value {
            PlatformArg::Chrome => Platform::Chrome,
            PlatformArg::Edge => Platform::Edge,
            PlatformArg::Firefox => Platform::Firefox,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Markdown,
    #[value(name = "org", alias = "org-mode")]
    OrgMode,
    #[value(name = "text")]
    PlainText,
}

impl From<FormatArg> for DocumentFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Markdown => DocumentFormat::Markdown,
            FormatArg::OrgMode => DocumentFormat::OrgMode,
            FormatArg::PlainText => DocumentFormat::PlainText,
        }
    }
}
