//! Notoy Core Library
//!
//! Bookmark tree navigation and note rendering for the Notoy browser
//! extensions. The browser's bookmark store, clock and locale come in
//! through small capability traits.
//!

mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod navigator;
pub mod platform;
pub mod session;
pub mod tree;
pub mod utils;
pub mod walker;

pub use config::{BookmarksConfig, LoggingConfig, NotesConfig, NotoyConfig};
pub use error::{Error, LoadError, TreeError};
pub use format::{file_name, NoteFormatter};
pub use model::{BookmarkNode, DocumentFormat, NodeId, NoteRecord};
pub use navigator::{Navigator, View};
pub use session::SessionState;
pub use tree::{MemoryTreeStore, TreeStore};
pub use walker::BookmarkWalker;
