//! Proxy Use Case
//!
//! Proxy rows feed every PAC script routed through them, so an update
//! regenerates the artifacts of all referencing OUs and users.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::sync::{PacSynchronizer, RegenerateReport};
use crate::application::translate_store_error;
use crate::domain::entities::{Proxy, ProxyDraft};
use crate::domain::policies::input_rules;
use crate::domain::ports::RecordStore;
use crate::domain::value_objects::{RecordId, RecordKind};
use crate::error::{PacError, PacResult};

/// Raw create/update input for a proxy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyPayload {
    pub name: String,
    pub protocol: String,
    pub host: String,
    pub port: u32,
    pub username: Option<String>,
    /// On update, `None` keeps the stored password
    pub password: Option<String>,
}

impl ProxyPayload {
    fn validate(self) -> PacResult<ProxyDraft> {
        Ok(ProxyDraft {
            name: input_rules::proxy_name(&self.name)?,
            protocol: input_rules::protocol(&self.protocol)?,
            host: input_rules::host(&self.host)?,
            port: input_rules::port(self.port)?,
            username: input_rules::optional_text(self.username.as_deref()),
            password: self.password.filter(|p| !p.is_empty()),
        })
    }
}

pub struct ProxyService {
    store: Arc<dyn RecordStore>,
    sync: Arc<PacSynchronizer>,
}

impl ProxyService {
    pub fn new(store: Arc<dyn RecordStore>, sync: Arc<PacSynchronizer>) -> Self {
        Self { store, sync }
    }

    pub fn create(&self, payload: ProxyPayload) -> PacResult<RecordId> {
        let draft = payload.validate()?;
        let id = self
            .store
            .insert_proxy(&draft)
            .map_err(translate_store_error)?;
        info!(name = %draft.name, id = %id, "proxy inserted");
        Ok(id)
    }

    /// Replace a proxy row, then rewrite every artifact routed through it
    ///
    /// Regeneration failures are reported, not rolled back: the row is the
    /// source of truth and `pac regenerate` can retry.
    pub fn update(&self, id: RecordId, payload: ProxyPayload) -> PacResult<RegenerateReport> {
        let mut draft = payload.validate()?;
        let existing = self.get(id)?;
        if draft.password.is_none() {
            draft.password = existing.password;
        }

        self.store
            .update_proxy(id, &draft)
            .map_err(translate_store_error)?;
        info!(name = %draft.name, id = %id, "proxy updated");

        let report = self.sync.regenerate_for_proxy(&draft.name)?;
        if !report.is_success() {
            warn!(
                name = %draft.name,
                failed = report.failed.len(),
                "some PAC files routed through the proxy were not regenerated"
            );
        }
        Ok(report)
    }

    /// Delete a proxy; rejected while any OU or user still references it
    pub fn delete(&self, id: RecordId) -> PacResult<()> {
        let existing = self.get(id)?;
        self.store
            .delete_proxy(id)
            .map_err(translate_store_error)?;
        info!(name = %existing.name, id = %id, "proxy deleted");
        Ok(())
    }

    pub fn get(&self, id: RecordId) -> PacResult<Proxy> {
        self.store.get_proxy(id)?.ok_or(PacError::NotFound {
            kind: RecordKind::Proxy,
            id,
        })
    }

    pub fn find(&self, name: &str) -> PacResult<Proxy> {
        self.store
            .get_proxy_by_name(name.trim())?
            .ok_or_else(|| PacError::UnknownReference {
                target: RecordKind::Proxy,
                name: name.trim().to_string(),
            })
    }

    pub fn list(&self) -> PacResult<Vec<Proxy>> {
        Ok(self.store.list_proxies()?)
    }
}
