use crate::model::BookmarkNode;

/// Longest title shown in full by [`display_title`]
pub const MAX_TITLE_CHARS: usize = 100;

/// Title of a bookmark or folder as shown in the popup.
///
/// Titles longer than [`MAX_TITLE_CHARS`] characters are cut and end in
/// `" ..."`; a missing title is empty.
///
/// # Examples
///
/// ```
/// use notoy_core::model::{BookmarkNode, NodeId};
/// use notoy_core::utils::display_title;
///
/// let node = BookmarkNode {
///     id: NodeId::from("1"),
///     parent_id: None,
///     index: 0,
///     title: Some("Rust".to_string()),
///     url: Some("https://www.rust-lang.org".to_string()),
///     children: None,
/// };
/// assert_eq!(display_title(&node), "Rust");
/// ```
pub fn display_title(node: &BookmarkNode) -> String {
    let title = node.title();
    if title.chars().count() > MAX_TITLE_CHARS {
        let cut: String = title.chars().take(MAX_TITLE_CHARS).collect();
        format!("{} ...", cut)
    } else {
        title.to_string()
    }
}

/// Replace every run of non-letter characters with a single `_`.
///
/// # Examples
///
/// ```
/// use notoy_core::utils::sanitize_file_stem;
///
/// assert_eq!(sanitize_file_stem("Hello, World!"), "Hello_World_");
/// assert_eq!(sanitize_file_stem("Grüße 2021"), "Grüße_");
/// ```
pub fn sanitize_file_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut in_run = false;
    for c in title.chars() {
        if c.is_alphabetic() {
            stem.push(c);
            in_run = false;
        } else if !in_run {
            stem.push('_');
            in_run = true;
        }
    }
    stem
}
