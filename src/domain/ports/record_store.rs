//! RecordStore port - the persistent table set
//!
//! Three named tables (proxies, OUs, users) plus a string key/value settings
//! table. Implementations enforce name uniqueness per table and the
//! references between tables:
//!
//! - OU/user `proxy` → proxy `name`: must exist, delete restricted,
//!   renames cascade
//! - user `ou` → OU `name`: must exist when set, delete sets null,
//!   renames cascade

use std::path::PathBuf;

use crate::domain::entities::{EntityDraft, Proxy, ProxyDraft, RoutingEntity};
use crate::domain::value_objects::{EntityKind, RecordId, RecordKind};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("UNIQUE constraint failed: {}.name ({name})", kind.table_name())]
    UniqueViolation { kind: RecordKind, name: String },

    #[error(
        "FOREIGN KEY constraint failed: {} references missing {} \"{reference}\"",
        kind.table_name(),
        target.table_name()
    )]
    ForeignKeyViolation {
        kind: RecordKind,
        target: RecordKind,
        reference: String,
    },

    #[error(
        "{} \"{name}\" is still referenced by {}",
        kind.table_name(),
        referenced_by.join(", ")
    )]
    RestrictViolation {
        kind: RecordKind,
        name: String,
        referenced_by: Vec<String>,
    },

    #[error("no row with id {id} in {}", kind.table_name())]
    MissingRow { kind: RecordKind, id: RecordId },

    #[error("failed to access record store: {message}")]
    Access { message: String },

    #[error("failed to serialize record store: {message}")]
    Serialization { message: String },

    #[error(
        "record store corrupted: {}\n  → Fix: restore it from a backup\n  → Details: {message}",
        path.display()
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("record store format incompatible: found version {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

/// Persistent table set shared by all services
pub trait RecordStore: Send + Sync {
    fn get_proxy(&self, id: RecordId) -> StoreResult<Option<Proxy>>;
    fn get_proxy_by_name(&self, name: &str) -> StoreResult<Option<Proxy>>;
    /// All proxies ordered by name
    fn list_proxies(&self) -> StoreResult<Vec<Proxy>>;
    fn insert_proxy(&self, draft: &ProxyDraft) -> StoreResult<RecordId>;
    fn update_proxy(&self, id: RecordId, draft: &ProxyDraft) -> StoreResult<()>;
    fn delete_proxy(&self, id: RecordId) -> StoreResult<()>;

    fn get_entity(&self, kind: EntityKind, id: RecordId) -> StoreResult<Option<RoutingEntity>>;
    fn get_entity_by_name(&self, kind: EntityKind, name: &str)
        -> StoreResult<Option<RoutingEntity>>;
    /// All rows of `kind` ordered by name
    fn list_entities(&self, kind: EntityKind) -> StoreResult<Vec<RoutingEntity>>;
    fn insert_entity(&self, kind: EntityKind, draft: &EntityDraft) -> StoreResult<RecordId>;
    fn update_entity(&self, kind: EntityKind, id: RecordId, draft: &EntityDraft)
        -> StoreResult<()>;
    fn delete_entity(&self, kind: EntityKind, id: RecordId) -> StoreResult<()>;

    fn get_setting(&self, key: &str) -> StoreResult<Option<String>>;
    fn put_setting(&self, key: &str, value: &str) -> StoreResult<()>;
}
