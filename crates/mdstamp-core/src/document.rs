use crate::config::StampConfig;
use crate::error::Result;
use crate::header;
use crate::io;
use crate::metadata::Metadata;
use std::path::{Path, PathBuf};

/// A markdown file as read from disk.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = io::read_text(path)?;
        Ok(Self::new(path, content))
    }

    pub fn has_header(&self) -> bool {
        header::has_header(&self.content)
    }

    pub fn metadata(&self, config: &StampConfig) -> Metadata {
        Metadata::derive(&self.path, &self.content, config)
    }

    /// The file contents after stamping, or `None` if a header is already present.
    pub fn stamped(&self, config: &StampConfig) -> Option<(Metadata, String)> {
        if self.has_header() {
            return None;
        }
        let md = self.metadata(config);
        let text = header::stamp(&md, &self.content);
        Some((md, text))
    }
}
