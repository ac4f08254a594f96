use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// StampConfig
// ---------------------------------------------------------------------------

/// Everything a stamping run needs to know about the tree it walks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StampConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_project_marker")]
    pub project_marker: String,
    #[serde(default = "default_project")]
    pub default_project: String,
    #[serde(default = "default_exclude_dir")]
    pub exclude_dir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_project_marker() -> String {
    paths::PROJECT_MARKER.to_string()
}

fn default_project() -> String {
    paths::DEFAULT_PROJECT.to_string()
}

fn default_exclude_dir() -> String {
    paths::EXCLUDED_DIR.to_string()
}

fn default_extension() -> String {
    paths::MARKDOWN_EXT.to_string()
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            project_marker: default_project_marker(),
            default_project: default_project(),
            exclude_dir: default_exclude_dir(),
            extension: default_extension(),
        }
    }
}

impl StampConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}
