//! FileSystem port - abstraction over the artifact directory tree
//!
//! The synchronizer only ever touches paths below the PAC root through this
//! trait, so tests can substitute a failing or in-memory implementation.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors, always carrying the offending path
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while touching `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::PermissionDenied { path }
            | FsError::Io { path, .. } => path,
        }
    }
}

/// Result of probing a directory before writing into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// Present and writable
    Exists,
    NotFound,
    /// Present but this process cannot create files in it
    NotWritable,
}

impl DirStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirStatus::Exists => "exists",
            DirStatus::NotFound => "not_found",
            DirStatus::NotWritable => "permission_denied",
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - local disk, atomic writes
/// - test doubles that fail on demand
pub trait FileSystem: Send + Sync {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace the file content atomically; the parent directory must exist
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn ensure_dir(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory tree; an absent path is not an error
    fn remove_tree(&self, path: &Path) -> FsResult<()>;

    /// Names of the immediate subdirectories, sorted; an absent path yields none
    fn list_dirs(&self, path: &Path) -> FsResult<Vec<String>>;

    /// Probe whether `path` exists and accepts new files
    fn dir_status(&self, path: &Path) -> FsResult<DirStatus>;
}
