//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{EntityService, PacSynchronizer, ProxyService, SettingsService};
use crate::config::Config;
use crate::domain::entities::AppSettings;
use crate::domain::ports::{FileSystem, RecordStore};
use crate::domain::services::ArtifactLayout;
use crate::domain::value_objects::EntityKind;
use crate::error::PacResult;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::store::TomlRecordStore;

/// Paths given on the command line; they beat config and environment
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub store: Option<PathBuf>,
    pub pac_dir: Option<PathBuf>,
}

/// Wired services sharing one store and one synchronizer
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
    pub sync: Arc<PacSynchronizer>,
}

impl AppContext {
    /// Open the TOML store and the local PAC directory
    pub fn open(config: Config, overrides: &PathOverrides) -> PacResult<Self> {
        let store_path = overrides
            .store
            .clone()
            .unwrap_or_else(|| config.store.path.clone());
        debug!(path = %store_path.display(), "opening record store");
        let store: Arc<dyn RecordStore> = Arc::new(TomlRecordStore::with_path(store_path));

        Self::with_parts(config, overrides, store, Arc::new(LocalFs::new()))
    }

    /// Wire services over explicit ports
    pub fn with_parts(
        config: Config,
        overrides: &PathOverrides,
        store: Arc<dyn RecordStore>,
        fs: Arc<dyn FileSystem>,
    ) -> PacResult<Self> {
        let settings = SettingsService::new(store.clone());
        settings.ensure_defaults()?;
        let app_settings = settings.load()?;

        let pac_dir = resolve_pac_directory(overrides.pac_dir.as_deref(), &config, &app_settings);
        debug!(path = %pac_dir.display(), "PAC directory resolved");

        let sync = Arc::new(PacSynchronizer::new(
            store.clone(),
            fs,
            ArtifactLayout::new(pac_dir),
        ));
        Ok(Self {
            config,
            store,
            sync,
        })
    }

    pub fn entities(&self, kind: EntityKind) -> EntityService {
        EntityService::new(kind, self.store.clone(), self.sync.clone())
    }

    pub fn proxies(&self) -> ProxyService {
        ProxyService::new(self.store.clone(), self.sync.clone())
    }

    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.store.clone())
    }

    pub fn pac_dir(&self) -> &Path {
        self.sync.layout().root()
    }

    pub fn public_url(&self) -> Option<&str> {
        self.config.pac.public_url.as_deref()
    }
}

/// PAC root: CLI flag, then config (which already folded in
/// `PACSMITH_PAC_DIR`), then the stored `pacDirectoryPath` setting
pub fn resolve_pac_directory(
    flag: Option<&Path>,
    config: &Config,
    settings: &AppSettings,
) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.pac.directory.clone())
        .unwrap_or_else(|| settings.pac_directory_path.clone())
}
