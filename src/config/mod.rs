//! Configuration module for pacsmith
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PACSMITH_*)
//! 3. `--config` / `PACSMITH_CONFIG`, else `./pacsmith.toml`
//! 4. User config (`<config dir>/pacsmith/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{candidate_paths, load_effective, ConfigWarning, LOCAL_CONFIG_FILE};
pub use types::{Config, LogFormat, LoggingConfig, PacConfig, StoreConfig};
