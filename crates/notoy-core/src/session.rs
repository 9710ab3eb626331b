use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::model::NodeId;

/// Navigation state kept between two popup sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Last bookmark shown, stored as `currentItemId` by the extension
    pub current_item_id: Option<NodeId>,
}

#[derive(Serialize, Deserialize)]
struct PersistentSession {
    version: u32,
    state: SessionState,
}

impl SessionState {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(current_item_id: Option<NodeId>) -> Self {
        Self { current_item_id }
    }

    /// A missing file is a fresh session
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let buffer = std::fs::read(path)?;
        let persisted: PersistentSession = bincode::deserialize(&buffer)?;

        if persisted.version != Self::CURRENT_VERSION {
            return Err(LoadError::Version {
                found: persisted.version,
                expected: Self::CURRENT_VERSION,
            });
        }

        Ok(persisted.state)
    }

    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        let buffer = bincode::serialize(&PersistentSession {
            version: Self::CURRENT_VERSION,
            state: self.clone(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, buffer)?;
        Ok(())
    }
}
