use std::cmp::Ordering;

use log::{debug, warn};

use crate::error::TreeError;
use crate::model::{BookmarkNode, NodeId};
use crate::tree::TreeStore;

#[cfg(test)]
mod tests;

/// Folder separator used by [`breadcrumb`]
pub const FOLDER_SEPARATOR: &str = "/";

/// Navigates the bookmark tree with point queries against a [`TreeStore`].
pub struct BookmarkWalker<'a, S: TreeStore + ?Sized> {
    store: &'a S,
    root_id: NodeId,
}

impl<'a, S: TreeStore + ?Sized> BookmarkWalker<'a, S> {
    pub fn new(store: &'a S, root_id: NodeId) -> Self {
        Self { store, root_id }
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root_id
    }

    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Sanitize a persisted id: unknown or vanished ids become the root id.
    pub async fn resolve_start_id(&self, candidate: Option<&NodeId>) -> NodeId {
        let Some(candidate) = candidate else {
            return self.root_id.clone();
        };

        match self.store.get_node(candidate).await {
            Ok(_) => candidate.clone(),
            Err(TreeError::NotFound(_)) => {
                warn!("Bookmark {} no longer exists, starting at the root", candidate);
                self.root_id.clone()
            }
        }
    }

    /// First bookmark at or below `id`, always following the first child.
    ///
    /// An empty folder on the way yields `None`.
    pub async fn first_leaf(&self, id: &NodeId) -> Result<Option<BookmarkNode>, TreeError> {
        let mut current = self.store.get_subtree(id).await?;

        loop {
            if current.is_bookmark() {
                debug!("First bookmark under {} is {}", id, current.id);
                return Ok(Some(current));
            }

            let first_child = current
                .children
                .take()
                .and_then(|children| children.into_iter().next());
            match first_child {
                Some(child) => current = child,
                None => {
                    debug!("Folder {} is empty, no bookmark under {}", current.id, id);
                    return Ok(None);
                }
            }
        }
    }

    /// First bookmark at or after `id` in tree order.
    ///
    /// Unlike [`Self::first_leaf`], an empty folder on the way does not end
    /// the search: it continues with the node following that folder.
    pub async fn first_bookmark_from(
        &self,
        id: &NodeId,
    ) -> Result<Option<BookmarkNode>, TreeError> {
        let mut current = self.store.get_subtree(id).await?;

        loop {
            if current.is_bookmark() {
                return Ok(Some(current));
            }

            let first_child = current
                .children
                .take()
                .and_then(|children| children.into_iter().next());
            current = match first_child {
                Some(child) => child,
                None => {
                    debug!("Skipping empty folder {}", current.id);
                    match self.next_leaf(&current.id).await? {
                        Some(next) => self.store.get_subtree(&next.id).await?,
                        None => return Ok(None),
                    }
                }
            };
        }
    }

    /// Tree-order successor of `id`.
    ///
    /// Looks for the sibling with the next index, climbing to the parent
    /// whenever the current node is the last child. The successor is
    /// returned as is, it may be a folder. Reaching the root (the configured
    /// root id, or a node without parent) yields `None`.
    pub async fn next_leaf(&self, id: &NodeId) -> Result<Option<BookmarkNode>, TreeError> {
        let mut current = self.store.get_subtree(id).await?;

        loop {
            let parent_id = match current.parent_id.clone() {
                Some(parent_id) if current.id != self.root_id => parent_id,
                _ => {
                    debug!("Reached the root {}, no bookmark after {}", current.id, id);
                    return Ok(None);
                }
            };
            let parent = self.store.get_subtree(&parent_id).await?;

            if let Some(next) = next_sibling(&current, &parent) {
                debug!("Next after {} is {}", id, next.id);
                return Ok(Some(next));
            }

            current = parent;
        }
    }

    /// Siblings of `node` of the same kind (bookmarks or folders), `node`
    /// included, sorted by id.
    pub async fn siblings_of(&self, node: &BookmarkNode) -> Result<Vec<BookmarkNode>, TreeError> {
        let Some(parent_id) = node.parent_id.as_ref() else {
            return Ok(Vec::new());
        };
        if node.id == self.root_id {
            return Ok(Vec::new());
        }

        let parent = self.store.get_subtree(parent_id).await?;
        let mut siblings: Vec<BookmarkNode> = parent
            .children
            .unwrap_or_default()
            .into_iter()
            .filter(|child| child.is_bookmark() == node.is_bookmark())
            .collect();
        siblings.sort_by(|a, b| compare_ids(&a.id, &b.id));
        Ok(siblings)
    }

    /// Folders containing `node`, root first.
    pub async fn ancestors(&self, node: &BookmarkNode) -> Result<Vec<BookmarkNode>, TreeError> {
        if node.id == self.root_id {
            return Ok(Vec::new());
        }

        let mut chain = Vec::new();
        let mut parent_id = node.parent_id.clone();
        while let Some(id) = parent_id {
            let parent = self.store.get_node(&id).await?;
            parent_id = if parent.id == self.root_id {
                None
            } else {
                parent.parent_id.clone()
            };
            chain.push(parent);
        }

        chain.reverse();
        Ok(chain)
    }
}

fn next_sibling(current: &BookmarkNode, parent: &BookmarkNode) -> Option<BookmarkNode> {
    parent
        .children
        .as_ref()?
        .iter()
        .find(|child| child.index == current.index + 1)
        .cloned()
}

/// Numeric when both ids are integers, as browsers assign them
fn compare_ids(a: &NodeId, b: &NodeId) -> Ordering {
    match (a.as_str().parse::<u64>(), b.as_str().parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Non-empty folder titles joined with [`FOLDER_SEPARATOR`]
pub fn breadcrumb(ancestors: &[BookmarkNode]) -> String {
    ancestors
        .iter()
        .map(|folder| folder.title())
        .filter(|title| !title.is_empty())
        .collect::<Vec<_>>()
        .join(FOLDER_SEPARATOR)
}
