//! Shared fixtures for application-layer unit tests

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tempfile::TempDir;

use crate::application::{EntityService, PacSynchronizer, ProxyService};
use crate::domain::entities::{EntityDraft, ProxyDraft};
use crate::domain::ports::{DirStatus, FileSystem, FsError, FsResult, RecordStore};
use crate::domain::services::ArtifactLayout;
use crate::domain::value_objects::{EntityKind, RecordId};
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::store::InMemoryRecordStore;

pub(crate) fn corp_proxy() -> ProxyDraft {
    ProxyDraft {
        name: "corp".to_string(),
        protocol: "socks5".to_string(),
        host: "10.0.0.5".to_string(),
        port: 1080,
        username: None,
        password: None,
    }
}

/// Local disk with switchable failures
#[derive(Default)]
pub(crate) struct FlakyFs {
    inner: LocalFs,
    pub fail_writes: AtomicBool,
    pub fail_removes: AtomicBool,
}

impl FileSystem for FlakyFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.inner.read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FsError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        self.inner.write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn ensure_dir(&self, path: &Path) -> FsResult<()> {
        self.inner.ensure_dir(path)
    }

    fn remove_tree(&self, path: &Path) -> FsResult<()> {
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(FsError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        self.inner.remove_tree(path)
    }

    fn list_dirs(&self, path: &Path) -> FsResult<Vec<String>> {
        self.inner.list_dirs(path)
    }

    fn dir_status(&self, path: &Path) -> FsResult<DirStatus> {
        self.inner.dir_status(path)
    }
}

/// In-memory store seeded with the `corp` proxy, artifacts under a temp dir
pub(crate) struct Fixture {
    _dir: TempDir,
    root: PathBuf,
    pub store: Arc<InMemoryRecordStore>,
    pub fs: Arc<FlakyFs>,
    pub sync: Arc<PacSynchronizer>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_root_subdir("pac")
    }

    pub fn with_root_subdir(sub: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(sub);
        let store = Arc::new(InMemoryRecordStore::new());
        store.insert_proxy(&corp_proxy()).unwrap();
        let fs = Arc::new(FlakyFs::default());
        let sync = Arc::new(PacSynchronizer::new(
            store.clone(),
            fs.clone(),
            ArtifactLayout::new(&root),
        ));
        Self {
            _dir: dir,
            root,
            store,
            fs,
            sync,
        }
    }

    pub fn failing_writes() -> Self {
        let fx = Self::new();
        fx.fs.fail_writes.store(true, Ordering::SeqCst);
        fx
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_ou(&self, draft: EntityDraft) -> RecordId {
        self.store.insert_entity(EntityKind::Ou, &draft).unwrap()
    }

    pub fn add_user(&self, draft: EntityDraft) -> RecordId {
        self.store.insert_entity(EntityKind::User, &draft).unwrap()
    }

    pub fn entities(&self, kind: EntityKind) -> EntityService {
        EntityService::new(kind, self.store.clone(), self.sync.clone())
    }

    pub fn proxies(&self) -> ProxyService {
        ProxyService::new(self.store.clone(), self.sync.clone())
    }
}
