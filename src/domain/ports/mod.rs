//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod record_store;

pub use file_system::{DirStatus, FileSystem, FsError, FsResult};
pub use record_store::{RecordStore, StoreError, StoreResult};
