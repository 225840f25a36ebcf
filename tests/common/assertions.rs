//! Custom assertion macros for contract and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a PAC file exists.
///
/// # Example
/// ```ignore
/// assert_artifact!(env, env.ou_pac("sales"));
/// ```
#[macro_export]
macro_rules! assert_artifact {
    ($env:expr, $path:expr) => {
        let path = $path;
        assert!(
            path.exists(),
            "Expected PAC file at '{}', but it doesn't exist.\n\
             Files found:\n  {}",
            path.display(),
            $crate::common::list_all_files(&$env.pac_root()).join("\n  ")
        );
    };
}

/// Assert that a PAC file does NOT exist.
#[macro_export]
macro_rules! assert_no_artifact {
    ($env:expr, $path:expr) => {
        let path = $path;
        assert!(
            !path.exists(),
            "Expected '{}' to NOT exist, but it does.\n\
             Files found:\n  {}",
            path.display(),
            $crate::common::list_all_files(&$env.pac_root()).join("\n  ")
        );
    };
}
