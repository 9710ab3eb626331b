use thiserror::Error;

use crate::model::NodeId;

/// Failure of a bookmark tree query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("bookmark node not found: {0}")]
    NotFound(NodeId),
}

/// Failure while loading or saving tree, session or config files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid bookmark tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid session data: {0}")]
    Session(#[from] bincode::Error),

    #[error("incompatible session version {found}, expected {expected}")]
    Version { found: u32, expected: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
