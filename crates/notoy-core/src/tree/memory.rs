use std::collections::HashMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use log::debug;

use super::TreeStore;
use crate::error::{LoadError, TreeError};
use crate::model::{BookmarkNode, NodeId};

struct Entry {
    /// Node without children
    node: BookmarkNode,
    /// Child ids in index order, `None` for bookmarks
    children: Option<Vec<NodeId>>,
}

struct Nodes {
    root: NodeId,
    entries: HashMap<NodeId, Entry>,
}

/// In-memory bookmark tree, loaded from and saved to the JSON a browser
/// returns for `bookmarks.getTree()`.
pub struct MemoryTreeStore {
    nodes: RwLock<Nodes>,
}

impl MemoryTreeStore {
    /// Build the store from a root node with its full `children` subtree.
    /// `parentId` and `index` are recomputed from the tree shape.
    pub fn from_tree(mut root: BookmarkNode) -> Self {
        root.parent_id = None;
        root.index = 0;
        let root_id = root.id.clone();
        let mut entries = HashMap::new();
        flatten(root, &mut entries);

        Self {
            nodes: RwLock::new(Nodes {
                root: root_id,
                entries,
            }),
        }
    }

    /// Accepts either a single root object or the one-element array the
    /// browser API returns.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let root: BookmarkNode = match value {
            serde_json::Value::Array(mut items) if items.len() == 1 => {
                serde_json::from_value(items.remove(0))?
            }
            other => serde_json::from_value(other)?,
        };
        Ok(Self::from_tree(root))
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;
        debug!("Loaded {} bookmark nodes from {:?}", store.len(), path);
        Ok(store)
    }

    pub fn to_tree(&self) -> BookmarkNode {
        let nodes = self.read();
        // The root entry is never removed
        build_subtree(&nodes.entries, &nodes.root).unwrap_or_else(|| BookmarkNode {
            id: nodes.root.clone(),
            parent_id: None,
            index: 0,
            title: None,
            url: None,
            children: Some(Vec::new()),
        })
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(&vec![self.to_tree()])?)
    }

    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn root_id(&self) -> NodeId {
        self.read().root.clone()
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, Nodes> {
        self.nodes.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Nodes> {
        self.nodes
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn flatten(mut node: BookmarkNode, entries: &mut HashMap<NodeId, Entry>) {
    let children = node.children.take();
    let child_ids = children.map(|children| {
        let mut ids = Vec::with_capacity(children.len());
        for (index, mut child) in children.into_iter().enumerate() {
            child.parent_id = Some(node.id.clone());
            child.index = index;
            ids.push(child.id.clone());
            flatten(child, entries);
        }
        ids
    });

    // Folders always carry a (possibly empty) child list
    let child_ids = match (child_ids, node.is_folder()) {
        (None, true) => Some(Vec::new()),
        (ids, _) => ids,
    };

    entries.insert(
        node.id.clone(),
        Entry {
            node,
            children: child_ids,
        },
    );
}

fn build_subtree(entries: &HashMap<NodeId, Entry>, id: &NodeId) -> Option<BookmarkNode> {
    let entry = entries.get(id)?;
    let mut node = entry.node.clone();
    node.children = entry.children.as_ref().map(|ids| {
        ids.iter()
            .filter_map(|child_id| build_subtree(entries, child_id))
            .collect()
    });
    Some(node)
}

fn remove_recursive(entries: &mut HashMap<NodeId, Entry>, id: &NodeId) {
    if let Some(entry) = entries.remove(id) {
        for child_id in entry.children.unwrap_or_default() {
            remove_recursive(entries, &child_id);
        }
    }
}

#[async_trait]
impl TreeStore for MemoryTreeStore {
    async fn get_node(&self, id: &NodeId) -> Result<BookmarkNode, TreeError> {
        debug!("get_node({})", id);
        self.read()
            .entries
            .get(id)
            .map(|entry| entry.node.clone())
            .ok_or_else(|| TreeError::NotFound(id.clone()))
    }

    async fn get_subtree(&self, id: &NodeId) -> Result<BookmarkNode, TreeError> {
        debug!("get_subtree({})", id);
        build_subtree(&self.read().entries, id).ok_or_else(|| TreeError::NotFound(id.clone()))
    }

    /// The root is not a removable node and reports `NotFound`.
    async fn remove(&self, id: &NodeId) -> Result<(), TreeError> {
        let mut nodes = self.write();
        if *id == nodes.root {
            return Err(TreeError::NotFound(id.clone()));
        }

        let parent_id = nodes
            .entries
            .get(id)
            .ok_or_else(|| TreeError::NotFound(id.clone()))?
            .node
            .parent_id
            .clone();

        remove_recursive(&mut nodes.entries, id);

        // Later siblings move up by one, like the browser does
        if let Some(parent_id) = parent_id {
            let siblings = nodes
                .entries
                .get_mut(&parent_id)
                .and_then(|parent| parent.children.as_mut())
                .map(|children| {
                    children.retain(|child| child != id);
                    children.clone()
                })
                .unwrap_or_default();
            for (index, sibling) in siblings.iter().enumerate() {
                if let Some(entry) = nodes.entries.get_mut(sibling) {
                    entry.node.index = index;
                }
            }
        }

        debug!("Removed bookmark node {}", id);
        Ok(())
    }
}
