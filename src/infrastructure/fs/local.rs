//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Mode for fresh PAC files before the umask; the web server must read them
#[cfg(unix)]
const PAC_FILE_MODE: u32 = 0o644;

use crate::domain::ports::file_system::{DirStatus, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temp file in the target directory and are renamed into
/// place, so a reader never sees a half-written PAC script. A replaced file
/// keeps its mode; a fresh one is world-readable subject to the umask.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = temp_in(parent).map_err(|e| FsError::from_io(parent, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(temp.path(), e))?;
        if let Ok(existing) = std::fs::metadata(path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| FsError::from_io(path, e))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(|e| FsError::from_io(path, e))?;
        temp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_dir(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_tree(&self, path: &Path) -> FsResult<()> {
        match std::fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FsError::from_io(path, e)),
        }
    }

    fn list_dirs(&self, path: &Path) -> FsResult<Vec<String>> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FsError::from_io(path, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let is_dir = entry
                .file_type()
                .map_err(|e| FsError::from_io(&entry.path(), e))?
                .is_dir();
            if let (true, Ok(name)) = (is_dir, entry.file_name().into_string()) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn dir_status(&self, path: &Path) -> FsResult<DirStatus> {
        match std::fs::metadata(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(DirStatus::NotFound),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Ok(DirStatus::NotWritable)
            }
            Err(e) => return Err(FsError::from_io(path, e)),
            Ok(meta) if !meta.is_dir() => return Ok(DirStatus::NotWritable),
            Ok(_) => {}
        }

        // Probe by creating (and dropping) an anonymous file
        match tempfile::tempfile_in(path) {
            Ok(_) => Ok(DirStatus::Exists),
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Ok(DirStatus::NotWritable)
            }
            Err(e) => Err(FsError::from_io(path, e)),
        }
    }
}

fn temp_in(parent: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(PAC_FILE_MODE));
    }
    builder.tempfile_in(parent)
}
