//! TOML Record Store
//!
//! Persists the table set at `pacsmith-store.toml` (or wherever the config
//! points). Every call takes the sibling `.lock` file for the whole
//! load-modify-save cycle, so concurrent CLI invocations serialize.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use super::tables::{Tables, TABLES_VERSION};
use super::TableAccess;
use crate::domain::ports::{StoreError, StoreResult};

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "pacsmith-store.toml";

pub struct TomlRecordStore {
    path: PathBuf,
}

impl TomlRecordStore {
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(DEFAULT_STORE_FILE))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn acquire(&self, exclusive: bool) -> StoreResult<fs::File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(access)?;
        }

        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(access)?;
        if exclusive {
            lock_file.lock_exclusive().map_err(access)?;
        } else {
            lock_file.lock_shared().map_err(access)?;
        }
        Ok(lock_file)
    }

    fn load_from_disk(&self) -> StoreResult<Tables> {
        if !self.path.exists() {
            return Ok(Tables::new());
        }

        let content = fs::read_to_string(&self.path).map_err(access)?;
        let tables: Tables = toml::from_str(&content).map_err(|e| StoreError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if tables.version() != TABLES_VERSION {
            return Err(StoreError::VersionMismatch {
                found: tables.version(),
                expected: TABLES_VERSION,
            });
        }
        Ok(tables)
    }

    fn save_to_disk(&self, tables: &Tables) -> StoreResult<()> {
        let content =
            toml::to_string_pretty(tables).map_err(|e| StoreError::Serialization {
                message: e.to_string(),
            })?;

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(parent).map_err(access)?;
        temp.write_all(content.as_bytes()).map_err(access)?;
        temp.as_file().sync_all().map_err(access)?;
        temp.persist(&self.path).map_err(|e| access(e.error))?;
        Ok(())
    }
}

impl Default for TomlRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TableAccess for TomlRecordStore {
    fn read<T>(&self, f: impl FnOnce(&Tables) -> StoreResult<T>) -> StoreResult<T> {
        let lock_file = self.acquire(false)?;
        let result = self.load_from_disk().and_then(|tables| f(&tables));
        drop(lock_file);
        result
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut Tables) -> StoreResult<T>) -> StoreResult<T> {
        let lock_file = self.acquire(true)?;
        let result = self.load_from_disk().and_then(|mut tables| {
            let value = f(&mut tables)?;
            self.save_to_disk(&tables)?;
            Ok(value)
        });
        drop(lock_file);
        result
    }
}

fn access(e: std::io::Error) -> StoreError {
    StoreError::Access {
        message: e.to_string(),
    }
}
