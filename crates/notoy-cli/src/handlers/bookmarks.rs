use std::io::Write;

use anyhow::Context;
use log::info;
use notoy_core::platform::Platform;
use notoy_core::utils::display_title;
use notoy_core::{MemoryTreeStore, Navigator, NodeId, NotoyConfig, SessionState, View};

use crate::cli::{BookmarkAction, BookmarksArgs};

/// Handle `notoy bookmarks ...`
///
/// Loads the tree and the session, applies one navigation action, prints
/// the resulting bookmark and stores the session again. `delete` also
/// writes the changed tree back.
pub async fn handle_bookmarks(
    config: &NotoyConfig,
    args: BookmarksArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let store = MemoryTreeStore::load(&args.tree)
        .with_context(|| format!("Failed to load bookmark tree {:?}", args.tree))?;
    let session = SessionState::load(&args.session)
        .with_context(|| format!("Failed to load session {:?}", args.session))?;

    let root_id = match (&config.bookmarks.root_id, args.platform) {
        (_, Some(platform)) => Platform::from(platform).root_id(),
        (Some(root_id), None) => root_id.clone(),
        (None, None) => config.bookmarks.platform.root_id(),
    };
    info!("Walking {} bookmark nodes from root {}", store.len(), root_id);

    let mut navigator = Navigator::new(&store, root_id, session);

    match args.action {
        BookmarkAction::Show => {
            let view = navigator.show().await?;
            print_view(out, view.as_ref())?;
        }
        BookmarkAction::Next => {
            let view = navigator.next().await?;
            print_view(out, view.as_ref())?;
        }
        BookmarkAction::Select { id } => {
            let view = navigator.select(NodeId::from(id)).await?;
            print_view(out, view.as_ref())?;
        }
        BookmarkAction::Delete => {
            let view = navigator.delete().await?;
            store
                .save(&args.tree)
                .with_context(|| format!("Failed to save bookmark tree {:?}", args.tree))?;
            print_view(out, view.as_ref())?;
        }
        BookmarkAction::Siblings => {
            let current = navigator.current().await?.map(|bookmark| bookmark.id);
            for sibling in navigator.siblings().await? {
                let marker = if Some(&sibling.id) == current.as_ref() {
                    "*"
                } else {
                    " "
                };
                writeln!(out, "{} {}\t{}", marker, sibling.id, display_title(&sibling))?;
            }
        }
        BookmarkAction::Url => {
            if let Some(bookmark) = navigator.current().await? {
                writeln!(out, "{}", bookmark.url())?;
            }
        }
    }

    navigator
        .into_session()
        .save(&args.session)
        .with_context(|| format!("Failed to save session {:?}", args.session))?;
    Ok(())
}

fn print_view(out: &mut dyn Write, view: Option<&View>) -> std::io::Result<()> {
    let Some(view) = view else {
        return writeln!(out, "No bookmarks found.");
    };

    let breadcrumb = view.breadcrumb();
    if !breadcrumb.is_empty() {
        writeln!(out, "{}", breadcrumb)?;
    }
    writeln!(out, "{}", display_title(&view.bookmark))?;
    writeln!(out, "{}", view.bookmark.url())
}
