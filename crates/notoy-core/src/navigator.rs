//! Popup navigation over the bookmark tree.
//!
//! The navigator is either at the root (nothing stored yet) or at a
//! bookmark. Every action ends at a bookmark again, or at the root when the
//! tree has none. A vanished bookmark never strands the user: lookups that
//! fail fall back to the root.

use log::{info, warn};

use crate::error::TreeError;
use crate::model::{BookmarkNode, NodeId};
use crate::session::SessionState;
use crate::tree::TreeStore;
use crate::walker::{breadcrumb, BookmarkWalker};

/// What the popup shows for the current bookmark
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub bookmark: BookmarkNode,
    /// Containing folders, root first
    pub ancestors: Vec<BookmarkNode>,
}

impl View {
    pub fn breadcrumb(&self) -> String {
        breadcrumb(&self.ancestors)
    }
}

pub struct Navigator<'a, S: TreeStore + ?Sized> {
    walker: BookmarkWalker<'a, S>,
    session: SessionState,
}

impl<'a, S: TreeStore + ?Sized> Navigator<'a, S> {
    pub fn new(store: &'a S, root_id: NodeId, session: SessionState) -> Self {
        Self {
            walker: BookmarkWalker::new(store, root_id),
            session,
        }
    }

    pub fn walker(&self) -> &BookmarkWalker<'a, S> {
        &self.walker
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn into_session(self) -> SessionState {
        self.session
    }

    /// Show the stored bookmark, or the first one of the tree.
    pub async fn show(&mut self) -> Result<Option<View>, TreeError> {
        let start = self
            .walker
            .resolve_start_id(self.session.current_item_id.as_ref())
            .await;
        self.enter(&start).await
    }

    /// The current bookmark, without moving or storing anything
    pub async fn current(&self) -> Result<Option<BookmarkNode>, TreeError> {
        let start = self
            .walker
            .resolve_start_id(self.session.current_item_id.as_ref())
            .await;
        self.walker.first_bookmark_from(&start).await
    }

    /// Move to the bookmark after the current one.
    ///
    /// Empty folders are skipped. After the last bookmark the navigator
    /// starts over at the root.
    pub async fn next(&mut self) -> Result<Option<View>, TreeError> {
        let from = self
            .walker
            .resolve_start_id(self.session.current_item_id.as_ref())
            .await;

        let next = match self.walker.next_leaf(&from).await {
            Ok(Some(next)) => self.walker.first_bookmark_from(&next.id).await,
            Ok(None) => Ok(None),
            Err(err) => Err(err),
        };

        match next {
            Ok(Some(bookmark)) => self.show_bookmark(bookmark).await,
            Ok(None) => {
                info!("No bookmark after {}, starting over at the root", from);
                let root = self.walker.root_id().clone();
                self.enter(&root).await
            }
            Err(err) => self.reset(err).await,
        }
    }

    /// Jump to the node picked from a folder or title dropdown.
    pub async fn select(&mut self, id: NodeId) -> Result<Option<View>, TreeError> {
        info!("Selected {}", id);
        self.session.current_item_id = Some(id);
        self.show().await
    }

    /// Delete the current bookmark and move on to its successor.
    ///
    /// The successor is computed before removing, removal shifts the
    /// indices of the following siblings.
    pub async fn delete(&mut self) -> Result<Option<View>, TreeError> {
        let current = self
            .walker
            .resolve_start_id(self.session.current_item_id.as_ref())
            .await;
        let node = self.walker.store().get_node(&current).await?;
        if !node.is_bookmark() {
            warn!("{} is not a bookmark, nothing deleted", current);
            return self.show().await;
        }

        let next = self.next().await?;
        self.walker.store().remove(&current).await?;
        info!("Deleted bookmark {} ({})", current, node.title());

        match next {
            // Wrapped around onto the bookmark that is gone now
            Some(view) if view.bookmark.id == current => {
                self.session.current_item_id = None;
                self.show().await
            }
            next => Ok(next),
        }
    }

    /// Siblings of the current bookmark, for the title dropdown
    pub async fn siblings(&self) -> Result<Vec<BookmarkNode>, TreeError> {
        match self.current().await? {
            Some(bookmark) => self.walker.siblings_of(&bookmark).await,
            None => Ok(Vec::new()),
        }
    }

    async fn enter(&mut self, id: &NodeId) -> Result<Option<View>, TreeError> {
        match self.walker.first_bookmark_from(id).await {
            Ok(Some(bookmark)) => self.show_bookmark(bookmark).await,
            Ok(None) => Ok(None),
            Err(err) if id != self.walker.root_id() => self.reset(err).await,
            Err(err) => Err(err),
        }
    }

    async fn show_bookmark(&mut self, bookmark: BookmarkNode) -> Result<Option<View>, TreeError> {
        let ancestors = self.walker.ancestors(&bookmark).await?;
        self.session.current_item_id = Some(bookmark.id.clone());
        Ok(Some(View {
            bookmark,
            ancestors,
        }))
    }

    async fn reset(&mut self, err: TreeError) -> Result<Option<View>, TreeError> {
        warn!("{}, going back to the root", err);
        let root = self.walker.root_id().clone();
        match self.walker.first_bookmark_from(&root).await? {
            Some(bookmark) => self.show_bookmark(bookmark).await,
            None => {
                self.session.current_item_id = None;
                Ok(None)
            }
        }
    }
}
