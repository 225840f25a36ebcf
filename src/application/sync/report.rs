//! Synchronizer report types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{ContentHash, EntityKind};

/// An entity whose artifact could not be regenerated
#[derive(Debug, Clone, Serialize)]
pub struct RegenerateFailure {
    pub kind: EntityKind,
    pub name: String,
    pub error: String,
}

/// Result of regenerating a set of artifacts
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegenerateReport {
    /// Artifacts written
    pub written: Vec<PathBuf>,
    /// Entities that failed, with the reason
    pub failed: Vec<RegenerateFailure>,
}

impl RegenerateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// How an artifact on disk compares with what the rows say it should be
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ArtifactState {
    UpToDate,
    Missing,
    Stale {
        expected: ContentHash,
        actual: ContentHash,
    },
    /// The entity cannot be compiled (no proxy, unknown protocol, ...)
    Unrenderable { reason: String },
}

impl ArtifactState {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, ArtifactState::UpToDate)
    }
}

impl std::fmt::Display for ArtifactState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactState::UpToDate => write!(f, "up-to-date"),
            ArtifactState::Missing => write!(f, "missing"),
            ArtifactState::Stale { .. } => write!(f, "stale"),
            ArtifactState::Unrenderable { .. } => write!(f, "unrenderable"),
        }
    }
}

/// Check result for one entity
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactCheck {
    pub kind: EntityKind,
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub state: ArtifactState,
    /// Script the rows compile to
    #[serde(skip)]
    pub expected: Option<String>,
    /// Script currently on disk
    #[serde(skip)]
    pub actual: Option<String>,
}

/// Result of comparing every artifact with its rows
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub artifacts: Vec<ArtifactCheck>,
    /// Artifact directories with no matching row
    pub orphans: Vec<PathBuf>,
}

impl CheckReport {
    /// Everything up to date and nothing orphaned
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty() && self.artifacts.iter().all(|a| a.state.is_up_to_date())
    }

    pub fn drifted(&self) -> impl Iterator<Item = &ArtifactCheck> {
        self.artifacts.iter().filter(|a| !a.state.is_up_to_date())
    }

    pub fn up_to_date_count(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| a.state.is_up_to_date())
            .count()
    }
}
