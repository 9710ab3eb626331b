use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bookmark identifier, assigned by the bookmark store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A node of the browser's bookmark tree.
///
/// Same JSON shape the browser hands out from `bookmarks.getTree()`.
/// A node with a `url` is a bookmark (leaf), a node without one is a folder.
/// `children` is only filled for folders fetched as a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,
    #[serde(default)]
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BookmarkNode>>,
}

impl BookmarkNode {
    pub fn is_bookmark(&self) -> bool {
        self.url.is_some()
    }

    pub fn is_folder(&self) -> bool {
        self.url.is_none()
    }

    /// Title, empty when the node has none
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// URL, empty for folders
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    /// Copy of the node without its descendants
    pub fn shallow(&self) -> BookmarkNode {
        BookmarkNode {
            children: None,
            ..self.clone()
        }
    }
}

/// Document formats a note can be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentFormat {
    #[default]
    #[serde(rename = "markdown")]
    Markdown,
    #[serde(rename = "orgMode")]
    OrgMode,
    #[serde(rename = "text")]
    PlainText,
}

/// Suffix and MIME type handed to whoever saves the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    pub suffix: &'static str,
    pub mime: &'static str,
}

impl DocumentFormat {
    /// Parse a stored option value. Unknown values fall back to Markdown.
    pub fn from_option(value: &str) -> Self {
        match value {
            "orgMode" => DocumentFormat::OrgMode,
            "text" => DocumentFormat::PlainText,
            _ => DocumentFormat::Markdown,
        }
    }

    pub fn as_option(&self) -> &'static str {
        match self {
            DocumentFormat::Markdown => "markdown",
            DocumentFormat::OrgMode => "orgMode",
            DocumentFormat::PlainText => "text",
        }
    }

    pub fn file_info(&self) -> FileInfo {
        match self {
            DocumentFormat::Markdown => FileInfo {
                suffix: ".md",
                mime: "text/markdown",
            },
            DocumentFormat::OrgMode => FileInfo {
                suffix: ".org",
                mime: "text/org",
            },
            DocumentFormat::PlainText => FileInfo {
                suffix: ".txt",
                mime: "text/plain",
            },
        }
    }
}

/// Captured page data plus the rendering switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    pub url: String,
    pub title: String,
    /// Comma separated
    pub keywords: String,
    pub description: String,
    pub text: String,
    pub add_timestamp: bool,
    pub add_yaml: bool,
    pub format: DocumentFormat,
}

impl Default for NoteRecord {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            title: "Title".to_string(),
            keywords: String::new(),
            description: String::new(),
            text: String::new(),
            add_timestamp: true,
            add_yaml: false,
            format: DocumentFormat::Markdown,
        }
    }
}

impl NoteRecord {
    /// Sample note shown when previewing the formatting options
    pub fn preview(format: DocumentFormat, add_timestamp: bool, add_yaml: bool) -> Self {
        Self {
            url: "https://github.com/Release-Candidate/Notoy-BrowserExtensions".to_string(),
            title: "Release-Candidate/Notoy-BrowserExtensions".to_string(),
            keywords: "Notoy, Browser Extension".to_string(),
            description: "The description of the page, taken from its meta tags.".to_string(),
            text: "Your own notes about the page go here.".to_string(),
            add_timestamp,
            add_yaml,
            format,
        }
    }
}
