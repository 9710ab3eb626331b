use async_trait::async_trait;

use crate::error::TreeError;
use crate::model::{BookmarkNode, NodeId};

mod memory;

pub use memory::MemoryTreeStore;

/// Read access to the browser's bookmark tree, plus the one write the
/// navigator issues.
///
/// Every call is a point query that may find the node gone, because the
/// user or another extension can edit bookmarks at any time.
#[async_trait]
pub trait TreeStore: Send + Sync {
    /// The node itself, without `children`
    async fn get_node(&self, id: &NodeId) -> Result<BookmarkNode, TreeError>;

    /// The node with all of its descendants
    async fn get_subtree(&self, id: &NodeId) -> Result<BookmarkNode, TreeError>;

    /// Remove a bookmark or folder (with everything below it)
    async fn remove(&self, id: &NodeId) -> Result<(), TreeError>;
}
