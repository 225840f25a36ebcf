//! Entity Use Case
//!
//! Create/update/delete for OUs and users. Each mutation commits the row
//! first and then synchronizes the artifact:
//!
//! - create: insert, write; a failed write deletes the new row again and
//!   surfaces the write error unchanged
//! - update: replace, remove the old artifact if renamed, write
//! - delete: delete, remove the artifact (best effort, logged)

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::settings::SettingsService;
use crate::application::sync::PacSynchronizer;
use crate::application::translate_store_error;
use crate::domain::entities::RoutingEntity;
use crate::domain::ports::RecordStore;
use crate::domain::value_objects::{EntityKind, RecordId};
use crate::error::{PacError, PacResult};

use super::payload::EntityPayload;

pub struct EntityService {
    kind: EntityKind,
    store: Arc<dyn RecordStore>,
    sync: Arc<PacSynchronizer>,
}

impl EntityService {
    pub fn new(
        kind: EntityKind,
        store: Arc<dyn RecordStore>,
        sync: Arc<PacSynchronizer>,
    ) -> Self {
        Self { kind, store, sync }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn create(&self, payload: EntityPayload) -> PacResult<RecordId> {
        let valid = payload.validate(self.kind)?;
        let default_mode = SettingsService::new(self.store.clone())
            .load()?
            .default_proxy_mode;
        let draft = valid.into_draft(default_mode);

        let id = self
            .store
            .insert_entity(self.kind, &draft)
            .map_err(translate_store_error)?;
        info!(kind = %self.kind, name = %draft.name, id = %id, "record inserted");

        let pending = PendingInsert::new(self.store.as_ref(), self.kind, id);
        self.sync.write(self.kind, &draft.name)?;
        pending.commit();

        Ok(id)
    }

    pub fn update(&self, id: RecordId, payload: EntityPayload) -> PacResult<()> {
        let valid = payload.validate(self.kind)?;
        let existing = self.get(id)?;
        let draft = valid.into_draft(existing.mode);

        self.store
            .update_entity(self.kind, id, &draft)
            .map_err(translate_store_error)?;
        info!(kind = %self.kind, name = %draft.name, id = %id, "record updated");

        if existing.name != draft.name {
            self.sync.remove(self.kind, &existing.name)?;
        }
        self.sync.write(self.kind, &draft.name)?;
        Ok(())
    }

    pub fn delete(&self, id: RecordId) -> PacResult<()> {
        let existing = self.get(id)?;

        self.store
            .delete_entity(self.kind, id)
            .map_err(translate_store_error)?;
        info!(kind = %self.kind, name = %existing.name, id = %id, "record deleted");

        if let Err(err) = self.sync.remove(self.kind, &existing.name) {
            warn!(
                kind = %self.kind,
                name = %existing.name,
                error = %err,
                "PAC directory left behind; `pacsmith pac prune` removes it"
            );
        }
        Ok(())
    }

    pub fn get(&self, id: RecordId) -> PacResult<RoutingEntity> {
        self.store
            .get_entity(self.kind, id)?
            .ok_or(PacError::NotFound {
                kind: self.kind.into(),
                id,
            })
    }

    /// Look an entity up by its unique name
    pub fn find(&self, name: &str) -> PacResult<RoutingEntity> {
        self.store
            .get_entity_by_name(self.kind, name.trim())?
            .ok_or_else(|| PacError::EntityNotFound {
                kind: self.kind,
                name: name.trim().to_string(),
            })
    }

    /// All entities of this kind, ordered by name
    pub fn list(&self) -> PacResult<Vec<RoutingEntity>> {
        Ok(self.store.list_entities(self.kind)?)
    }
}

/// Deletes a freshly inserted row on drop unless committed
struct PendingInsert<'a> {
    store: &'a dyn RecordStore,
    kind: EntityKind,
    id: RecordId,
    committed: bool,
}

impl<'a> PendingInsert<'a> {
    fn new(store: &'a dyn RecordStore, kind: EntityKind, id: RecordId) -> Self {
        Self {
            store,
            kind,
            id,
            committed: false,
        }
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for PendingInsert<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        warn!(kind = %self.kind, id = %self.id, "PAC generation failed; deleting inserted record");
        if let Err(err) = self.store.delete_entity(self.kind, self.id) {
            error!(kind = %self.kind, id = %self.id, error = %err, "compensating delete failed");
        }
    }
}
