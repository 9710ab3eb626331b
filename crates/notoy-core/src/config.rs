use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::model::{DocumentFormat, NodeId};
use crate::platform::Platform;

/// Top-level configuration for Notoy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotoyConfig {
    #[serde(default)]
    pub notes: NotesConfig,
    #[serde(default)]
    pub bookmarks: BookmarksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for saved notes, the extension's options page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesConfig {
    #[serde(default)]
    pub format: DocumentFormat,
    #[serde(default = "default_true")]
    pub add_timestamp: bool,
    #[serde(default)]
    pub add_yaml: bool,
    /// Overrides the locale taken from the environment
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarksConfig {
    #[serde(default)]
    pub platform: Platform,
    /// Root id for trees that use neither browser's convention
    #[serde(default)]
    pub root_id: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`; `RUST_LOG` wins when set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Markdown,
            add_timestamp: true,
            add_yaml: false,
            locale: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl BookmarksConfig {
    pub fn root_id(&self) -> NodeId {
        self.root_id
            .clone()
            .unwrap_or_else(|| self.platform.root_id())
    }
}

impl NotoyConfig {
    /// Load config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Load config from a file, defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }
}
