//! PacArtifact - a compiled PAC script and where it belongs
//!
//! Artifacts have no identity of their own: they are derived from an entity
//! row plus its proxy, and live at a path keyed by `(kind, name)`.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, EntityKind};

/// A compiled PAC script ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacArtifact {
    kind: EntityKind,
    name: String,
    path: PathBuf,
    content: String,
}

impl PacArtifact {
    pub fn new(
        kind: EntityKind,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the `.pac` file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }

    /// Consume the artifact, keeping only the script text
    pub fn into_content(self) -> String {
        self.content
    }
}
