//! PAC Synchronizer
//!
//! Keeps the artifact tree in step with the record store. Every operation
//! re-reads the rows it needs; callers never pass entity copies in, so a
//! stale in-memory value can never be written out.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{PacArtifact, RoutingEntity};
use crate::domain::ports::{DirStatus, FileSystem, RecordStore};
use crate::domain::services::{compile, ArtifactLayout};
use crate::domain::value_objects::{ContentHash, EntityKind};
use crate::error::{PacError, PacResult};

use super::report::{
    ArtifactCheck, ArtifactState, CheckReport, RegenerateFailure, RegenerateReport,
};

pub struct PacSynchronizer {
    store: Arc<dyn RecordStore>,
    fs: Arc<dyn FileSystem>,
    layout: ArtifactLayout,
}

impl PacSynchronizer {
    pub fn new(
        store: Arc<dyn RecordStore>,
        fs: Arc<dyn FileSystem>,
        layout: ArtifactLayout,
    ) -> Self {
        Self { store, fs, layout }
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Compile the artifact for `(kind, name)` from fresh rows, without
    /// touching the file system
    pub fn render(&self, kind: EntityKind, name: &str) -> PacResult<PacArtifact> {
        let entity = self
            .store
            .get_entity_by_name(kind, name)?
            .ok_or_else(|| PacError::EntityNotFound {
                kind,
                name: name.to_string(),
            })?;
        self.render_entity(&entity)
    }

    fn render_entity(&self, entity: &RoutingEntity) -> PacResult<PacArtifact> {
        let proxy_name = entity
            .proxy
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| PacError::ProxyNotAssigned {
                kind: entity.kind,
                name: entity.name.clone(),
            })?;
        let proxy = self
            .store
            .get_proxy_by_name(proxy_name)?
            .ok_or_else(|| PacError::ProxyNotFound {
                kind: entity.kind,
                name: entity.name.clone(),
                proxy: proxy_name.to_string(),
            })?;

        let content = compile(entity, &proxy)?;
        Ok(PacArtifact::new(
            entity.kind,
            entity.name.clone(),
            self.layout.artifact_path(entity.kind, &entity.name),
            content,
        ))
    }

    /// Compile and write the artifact for `(kind, name)`
    ///
    /// Idempotent: unchanged rows produce byte-identical files.
    pub fn write(&self, kind: EntityKind, name: &str) -> PacResult<PacArtifact> {
        let artifact = self.render(kind, name)?;
        self.write_artifact(&artifact)?;
        Ok(artifact)
    }

    fn write_artifact(&self, artifact: &PacArtifact) -> PacResult<()> {
        let kind = artifact.kind();
        self.fs
            .ensure_dir(&self.layout.kind_dir(kind))
            .map_err(PacError::synchronization)?;
        self.fs
            .ensure_dir(&self.layout.entity_dir(kind, artifact.name()))
            .map_err(PacError::synchronization)?;
        self.fs
            .write(artifact.path(), artifact.content())
            .map_err(PacError::synchronization)?;

        info!(
            kind = %kind,
            name = artifact.name(),
            path = %artifact.path().display(),
            hash = artifact.hash().short(),
            "PAC file written"
        );
        Ok(())
    }

    /// Remove the artifact directory of `(kind, name)`; absent is success
    pub fn remove(&self, kind: EntityKind, name: &str) -> PacResult<()> {
        let dir = self.layout.entity_dir(kind, name);
        self.fs
            .remove_tree(&dir)
            .map_err(PacError::synchronization)?;
        info!(kind = %kind, name, path = %dir.display(), "PAC directory removed");
        Ok(())
    }

    /// Rewrite every OU and user artifact
    pub fn regenerate_all(&self) -> PacResult<RegenerateReport> {
        self.regenerate_where(|_| true)
    }

    /// Rewrite the artifacts of every entity routed through `proxy`
    pub fn regenerate_for_proxy(&self, proxy: &str) -> PacResult<RegenerateReport> {
        self.regenerate_where(|entity| entity.proxy.as_deref() == Some(proxy))
    }

    fn regenerate_where(
        &self,
        filter: impl Fn(&RoutingEntity) -> bool,
    ) -> PacResult<RegenerateReport> {
        let mut report = RegenerateReport::new();

        for kind in EntityKind::ALL {
            for entity in self.store.list_entities(kind)? {
                if !filter(&entity) {
                    continue;
                }
                let outcome = self
                    .render_entity(&entity)
                    .and_then(|artifact| self.write_artifact(&artifact).map(|()| artifact));
                match outcome {
                    Ok(artifact) => report.written.push(artifact.path().to_path_buf()),
                    Err(err) => {
                        warn!(kind = %kind, name = %entity.name, error = %err, "PAC regeneration failed");
                        report.failed.push(RegenerateFailure {
                            kind,
                            name: entity.name,
                            error: err.to_string(),
                        });
                    }
                }
            }
        }

        debug!(
            written = report.written.len(),
            failed = report.failed.len(),
            "regeneration finished"
        );
        Ok(report)
    }

    /// Compare every artifact on disk with what its rows compile to, and
    /// list artifact directories that no row owns
    pub fn check(&self) -> PacResult<CheckReport> {
        let mut report = CheckReport::default();

        for kind in EntityKind::ALL {
            let entities = self.store.list_entities(kind)?;

            for entity in &entities {
                report.artifacts.push(self.check_entity(entity)?);
            }

            let kind_dir = self.layout.kind_dir(kind);
            let reserved = self.layout.reserved_names(kind);
            let on_disk = self
                .fs
                .list_dirs(&kind_dir)
                .map_err(PacError::synchronization)?;
            report.orphans.extend(
                on_disk
                    .into_iter()
                    .filter(|dir| !reserved.contains(&dir.as_str()))
                    .filter(|dir| !entities.iter().any(|e| &e.name == dir))
                    .map(|dir| kind_dir.join(dir)),
            );
        }

        Ok(report)
    }

    fn check_entity(&self, entity: &RoutingEntity) -> PacResult<ArtifactCheck> {
        let path = self.layout.artifact_path(entity.kind, &entity.name);
        let mut check = ArtifactCheck {
            kind: entity.kind,
            name: entity.name.clone(),
            path: path.clone(),
            state: ArtifactState::UpToDate,
            expected: None,
            actual: None,
        };

        let artifact = match self.render_entity(entity) {
            Ok(artifact) => artifact,
            Err(err) => {
                check.state = ArtifactState::Unrenderable {
                    reason: err.to_string(),
                };
                return Ok(check);
            }
        };

        if !self.fs.exists(&path) {
            check.state = ArtifactState::Missing;
            check.expected = Some(artifact.into_content());
            return Ok(check);
        }

        let actual = self.fs.read(&path).map_err(PacError::synchronization)?;
        let expected_hash = artifact.hash();
        let actual_hash = ContentHash::from_content(&actual);
        if expected_hash != actual_hash {
            check.state = ArtifactState::Stale {
                expected: expected_hash,
                actual: actual_hash,
            };
        }
        check.expected = Some(artifact.into_content());
        check.actual = Some(actual);
        Ok(check)
    }

    /// Delete orphan artifact directories, returning what was removed
    pub fn prune_orphans(&self) -> PacResult<Vec<PathBuf>> {
        let orphans = self.check()?.orphans;
        for dir in &orphans {
            self.fs
                .remove_tree(dir)
                .map_err(PacError::synchronization)?;
            info!(path = %dir.display(), "orphan PAC directory removed");
        }
        Ok(orphans)
    }

    /// State of the PAC root directory
    pub fn directory_status(&self) -> PacResult<DirStatus> {
        self.fs
            .dir_status(self.layout.root())
            .map_err(PacError::synchronization)
    }

    /// Create the PAC root (with parents) and report whether it is writable
    pub fn ensure_directory(&self) -> PacResult<DirStatus> {
        let root = self.layout.root();
        self.fs.ensure_dir(root).map_err(PacError::synchronization)?;
        let status = self.directory_status()?;
        info!(path = %root.display(), status = status.as_str(), "PAC directory ensured");
        Ok(status)
    }
}
