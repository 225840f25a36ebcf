//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `store/` - Record stores (TOML file, in-memory)

pub mod fs;
pub mod store;

// Re-export for convenience
pub use fs::LocalFs;
pub use store::{InMemoryRecordStore, TomlRecordStore};
