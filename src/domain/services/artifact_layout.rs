//! Artifact layout - where each entity's PAC file lives
//!
//! ```text
//! <root>/<ou>/<ou>.pac
//! <root>/users/<user>/<user>.pac
//! ```
//!
//! The nesting keeps the public URL predictable from the entity name alone,
//! so this layout must not change.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::EntityKind;

/// PAC file extension
pub const PAC_EXTENSION: &str = "pac";

/// Maps `(kind, name)` to directories and files below the PAC root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    root: PathBuf,
}

impl ArtifactLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base directory shared by all entities of `kind`
    pub fn kind_dir(&self, kind: EntityKind) -> PathBuf {
        match kind.artifact_subdir() {
            Some(sub) => self.root.join(sub),
            None => self.root.clone(),
        }
    }

    /// Directory owned exclusively by one entity
    pub fn entity_dir(&self, kind: EntityKind, name: &str) -> PathBuf {
        self.kind_dir(kind).join(name)
    }

    /// `<kind_dir>/<name>/<name>.pac`
    pub fn artifact_path(&self, kind: EntityKind, name: &str) -> PathBuf {
        self.entity_dir(kind, name).join(file_name(name))
    }

    /// Directory names under `kind_dir` that never belong to an entity
    pub fn reserved_names(&self, kind: EntityKind) -> &'static [&'static str] {
        match kind {
            EntityKind::Ou => &["users"],
            EntityKind::User => &[],
        }
    }
}

/// `<name>.pac`
pub fn file_name(name: &str) -> String {
    format!("{name}.{PAC_EXTENSION}")
}

/// URL under which a web server exposing the PAC root serves the artifact
pub fn public_url(base_url: &str, kind: EntityKind, name: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let file = file_name(name);
    match kind.artifact_subdir() {
        Some(sub) => format!("{base}/{sub}/{name}/{file}"),
        None => format!("{base}/{name}/{file}"),
    }
}
