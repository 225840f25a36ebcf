//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PacError, PacResult};

use super::types::Config;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "pacsmith.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PacResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PacError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PacError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files consulted when none is named explicitly, in priority order
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("pacsmith").join("config.toml"));
    }
    paths
}

/// Resolve and load the effective configuration
///
/// An explicit path (flag or `PACSMITH_CONFIG`) must exist. Otherwise the
/// first existing candidate is used, falling back to defaults. Environment
/// overrides are applied last.
pub fn load_effective(explicit: Option<&Path>) -> PacResult<(Config, Vec<ConfigWarning>)> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("PACSMITH_CONFIG").map(PathBuf::from));

    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(&path)?,
        None => match candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (PACSMITH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply `PACSMITH_*` overrides read through `lookup`
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    // PACSMITH_STORE
    if let Some(path) = get("PACSMITH_STORE") {
        config.store.path = PathBuf::from(path);
    }

    // PACSMITH_PAC_DIR
    if let Some(dir) = get("PACSMITH_PAC_DIR") {
        config.pac.directory = Some(PathBuf::from(dir));
    }

    // PACSMITH_PUBLIC_URL
    if let Some(url) = get("PACSMITH_PUBLIC_URL") {
        config.pac.public_url = Some(url);
    }

    // PACSMITH_LOG_LEVEL
    if let Some(level) = get("PACSMITH_LOG_LEVEL") {
        config.logging.level = level;
    }

    // PACSMITH_LOG_FORMAT
    if let Some(format) = get("PACSMITH_LOG_FORMAT") {
        config.apply_log_format(&format);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "path",
        "pac",
        "directory",
        "public_url",
        "logging",
        "level",
        "format",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
