//! Record store implementations
//!
//! Both implementations hand a [`Tables`] value to a closure under a lock;
//! the [`RecordStore`] port is implemented once on top of that.

mod memory;
mod tables;
mod toml_store;

pub use memory::InMemoryRecordStore;
pub use tables::{Tables, TABLES_VERSION};
pub use toml_store::{TomlRecordStore, DEFAULT_STORE_FILE};

use crate::domain::entities::{EntityDraft, Proxy, ProxyDraft, RoutingEntity};
use crate::domain::ports::{RecordStore, StoreResult};
use crate::domain::value_objects::{EntityKind, RecordId};

/// Locked access to a table set
///
/// `mutate` commits only when the closure returns `Ok`.
pub trait TableAccess {
    fn read<T>(&self, f: impl FnOnce(&Tables) -> StoreResult<T>) -> StoreResult<T>;
    fn mutate<T>(&self, f: impl FnOnce(&mut Tables) -> StoreResult<T>) -> StoreResult<T>;
}

impl<S: TableAccess + Send + Sync> RecordStore for S {
    fn get_proxy(&self, id: RecordId) -> StoreResult<Option<Proxy>> {
        self.read(|t| Ok(t.proxy(id)))
    }

    fn get_proxy_by_name(&self, name: &str) -> StoreResult<Option<Proxy>> {
        self.read(|t| Ok(t.proxy_by_name(name)))
    }

    fn list_proxies(&self) -> StoreResult<Vec<Proxy>> {
        self.read(|t| Ok(t.proxies()))
    }

    fn insert_proxy(&self, draft: &ProxyDraft) -> StoreResult<RecordId> {
        self.mutate(|t| t.insert_proxy(draft))
    }

    fn update_proxy(&self, id: RecordId, draft: &ProxyDraft) -> StoreResult<()> {
        self.mutate(|t| t.update_proxy(id, draft))
    }

    fn delete_proxy(&self, id: RecordId) -> StoreResult<()> {
        self.mutate(|t| t.delete_proxy(id))
    }

    fn get_entity(&self, kind: EntityKind, id: RecordId) -> StoreResult<Option<RoutingEntity>> {
        self.read(|t| Ok(t.entity(kind, id)))
    }

    fn get_entity_by_name(
        &self,
        kind: EntityKind,
        name: &str,
    ) -> StoreResult<Option<RoutingEntity>> {
        self.read(|t| Ok(t.entity_by_name(kind, name)))
    }

    fn list_entities(&self, kind: EntityKind) -> StoreResult<Vec<RoutingEntity>> {
        self.read(|t| Ok(t.entities(kind)))
    }

    fn insert_entity(&self, kind: EntityKind, draft: &EntityDraft) -> StoreResult<RecordId> {
        self.mutate(|t| t.insert_entity(kind, draft))
    }

    fn update_entity(
        &self,
        kind: EntityKind,
        id: RecordId,
        draft: &EntityDraft,
    ) -> StoreResult<()> {
        self.mutate(|t| t.update_entity(kind, id, draft))
    }

    fn delete_entity(&self, kind: EntityKind, id: RecordId) -> StoreResult<()> {
        self.mutate(|t| t.delete_entity(kind, id))
    }

    fn get_setting(&self, key: &str) -> StoreResult<Option<String>> {
        self.read(|t| Ok(t.setting(key)))
    }

    fn put_setting(&self, key: &str, value: &str) -> StoreResult<()> {
        self.mutate(|t| {
            t.put_setting(key, value);
            Ok(())
        })
    }
}
