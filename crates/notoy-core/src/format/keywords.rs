//! Rewrites of the comma separated keyword list.

/// Keywords split at commas, whitespace around each comma dropped.
///
/// Whitespace before the first and after the last keyword is kept as is,
/// only the whitespace touching a comma goes. Empty keywords between two
/// commas are kept as empty strings.
fn split_keywords(keywords: &str) -> Vec<&str> {
    let parts: Vec<&str> = keywords.split(',').collect();
    let last = parts.len() - 1;
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let part = if i > 0 { part.trim_start() } else { part };
            if i < last {
                part.trim_end()
            } else {
                part
            }
        })
        .collect()
}

/// Replace every whitespace run that follows a keyword character with `_`.
fn underscore_spaces(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    let mut chars = keyword.chars().peekable();
    let mut previous: Option<char> = None;

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            previous = Some(c);
            continue;
        }

        let mut run = String::from(c);
        while let Some(next) = chars.next_if(|n| n.is_whitespace()) {
            run.push(next);
        }
        if previous.is_some_and(|p| p != ',') {
            out.push('_');
        } else {
            out.push_str(&run);
        }
        previous = Some(c);
    }
    out
}

/// Markdown hashtags: `"a b, c"` -> `"#a_b, #c"`
pub fn tagify_keywords(keywords: &str) -> String {
    let joined = split_keywords(keywords).join(", #");
    underscore_spaces(&format!("#{}", joined.trim_start()))
}

/// Org-mode file tags: `"a b, c"` -> `":a_b:c:"`
///
/// Trailing whitespace closes the tags with `::` instead of `:`, the way
/// existing notes were written.
pub fn orgify_keywords(keywords: &str) -> String {
    let joined = split_keywords(keywords).join(":");
    let tags = joined.trim_start();
    let body = tags.trim_end();
    let close = if body.len() < tags.len() { "::" } else { ":" };
    underscore_spaces(&format!(":{}{}", body, close))
}

/// YAML list items, one `\n  - ` per keyword
///
/// Only whitespace around commas is removed, as in `split_keywords`: the
/// first item keeps its leading and the last one its trailing whitespace.
pub fn yaml_keywords(keywords: &str) -> String {
    split_keywords(keywords)
        .iter()
        .map(|keyword| format!("\n  - {}", keyword))
        .collect()
}
