//! In-memory table set with the store's constraints
//!
//! Both store implementations keep a `Tables` value and only differ in how
//! it is loaded and persisted. Every operation checks its constraints before
//! mutating, so a failed call leaves the tables untouched.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{EntityDraft, Proxy, ProxyDraft, RoutingEntity};
use crate::domain::ports::{StoreError, StoreResult};
use crate::domain::value_objects::{EntityKind, RecordId, RecordKind, RoutingMode};

/// Current on-disk format version
pub const TABLES_VERSION: u32 = 1;

/// Last id handed out per table; ids are never reused
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Sequences {
    #[serde(default)]
    proxies: u64,
    #[serde(default)]
    ous: u64,
    #[serde(default)]
    users: u64,
}

impl Sequences {
    fn next(&mut self, kind: RecordKind) -> RecordId {
        let counter = match kind {
            RecordKind::Proxy => &mut self.proxies,
            RecordKind::Ou => &mut self.ous,
            RecordKind::User => &mut self.users,
        };
        *counter += 1;
        RecordId::new(*counter)
    }
}

/// One OU or user row as persisted (the kind is implied by the table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct EntityRow {
    id: RecordId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    proxy: Option<String>,
    #[serde(default)]
    mode: RoutingMode,
    #[serde(default)]
    domains: Vec<String>,
    #[serde(default)]
    bypass_domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ou: Option<String>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl EntityRow {
    fn to_entity(&self, kind: EntityKind) -> RoutingEntity {
        RoutingEntity {
            id: self.id,
            kind,
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
            proxy: self.proxy.clone(),
            mode: self.mode,
            domains: self.domains.clone(),
            bypass_domains: self.bypass_domains.clone(),
            ou: self.ou.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn apply(&mut self, kind: EntityKind, draft: &EntityDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.color = draft.color.clone();
        self.proxy = draft.proxy.clone();
        self.mode = draft.mode;
        self.domains = draft.domains.clone();
        self.bypass_domains = draft.bypass_domains.clone();
        self.ou = match kind {
            EntityKind::User => draft.ou.clone(),
            EntityKind::Ou => None,
        };
        self.updated_at = Utc::now();
    }
}

/// The full table set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    version: u32,
    #[serde(default)]
    settings: BTreeMap<String, String>,
    #[serde(default)]
    sequences: Sequences,
    #[serde(default)]
    proxies: Vec<Proxy>,
    #[serde(default)]
    ous: Vec<EntityRow>,
    #[serde(default)]
    users: Vec<EntityRow>,
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

impl Tables {
    pub fn new() -> Self {
        Self {
            version: TABLES_VERSION,
            settings: BTreeMap::new(),
            sequences: Sequences::default(),
            proxies: Vec::new(),
            ous: Vec::new(),
            users: Vec::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    // ---- proxies ----

    pub fn proxy(&self, id: RecordId) -> Option<Proxy> {
        self.proxies.iter().find(|p| p.id == id).cloned()
    }

    pub fn proxy_by_name(&self, name: &str) -> Option<Proxy> {
        self.proxies.iter().find(|p| p.name == name).cloned()
    }

    pub fn proxies(&self) -> Vec<Proxy> {
        let mut proxies = self.proxies.clone();
        proxies.sort_by(|a, b| a.name.cmp(&b.name));
        proxies
    }

    pub fn insert_proxy(&mut self, draft: &ProxyDraft) -> StoreResult<RecordId> {
        if self.proxies.iter().any(|p| p.name == draft.name) {
            return Err(StoreError::UniqueViolation {
                kind: RecordKind::Proxy,
                name: draft.name.clone(),
            });
        }

        let id = self.sequences.next(RecordKind::Proxy);
        let now = Utc::now();
        self.proxies.push(Proxy {
            id,
            name: draft.name.clone(),
            protocol: draft.protocol.clone(),
            host: draft.host.clone(),
            port: draft.port,
            username: draft.username.clone(),
            password: draft.password.clone(),
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    pub fn update_proxy(&mut self, id: RecordId, draft: &ProxyDraft) -> StoreResult<()> {
        let old_name = self
            .proxies
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .ok_or(StoreError::MissingRow {
                kind: RecordKind::Proxy,
                id,
            })?;
        if self
            .proxies
            .iter()
            .any(|p| p.id != id && p.name == draft.name)
        {
            return Err(StoreError::UniqueViolation {
                kind: RecordKind::Proxy,
                name: draft.name.clone(),
            });
        }

        if let Some(proxy) = self.proxies.iter_mut().find(|p| p.id == id) {
            proxy.name = draft.name.clone();
            proxy.protocol = draft.protocol.clone();
            proxy.host = draft.host.clone();
            proxy.port = draft.port;
            proxy.username = draft.username.clone();
            proxy.password = draft.password.clone();
            proxy.updated_at = Utc::now();
        }

        if old_name != draft.name {
            for row in self.ous.iter_mut().chain(self.users.iter_mut()) {
                if row.proxy.as_deref() == Some(old_name.as_str()) {
                    row.proxy = Some(draft.name.clone());
                }
            }
        }
        Ok(())
    }

    pub fn delete_proxy(&mut self, id: RecordId) -> StoreResult<()> {
        let proxy = self.proxy(id).ok_or(StoreError::MissingRow {
            kind: RecordKind::Proxy,
            id,
        })?;

        let referenced_by: Vec<String> = EntityKind::ALL
            .iter()
            .flat_map(|kind| {
                self.rows(*kind)
                    .iter()
                    .filter(|row| row.proxy.as_deref() == Some(proxy.name.as_str()))
                    .map(move |row| format!("{}:{}", kind, row.name))
            })
            .collect();
        if !referenced_by.is_empty() {
            return Err(StoreError::RestrictViolation {
                kind: RecordKind::Proxy,
                name: proxy.name,
                referenced_by,
            });
        }

        self.proxies.retain(|p| p.id != id);
        Ok(())
    }

    // ---- OUs and users ----

    fn rows(&self, kind: EntityKind) -> &Vec<EntityRow> {
        match kind {
            EntityKind::Ou => &self.ous,
            EntityKind::User => &self.users,
        }
    }

    fn rows_mut(&mut self, kind: EntityKind) -> &mut Vec<EntityRow> {
        match kind {
            EntityKind::Ou => &mut self.ous,
            EntityKind::User => &mut self.users,
        }
    }

    pub fn entity(&self, kind: EntityKind, id: RecordId) -> Option<RoutingEntity> {
        self.rows(kind)
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.to_entity(kind))
    }

    pub fn entity_by_name(&self, kind: EntityKind, name: &str) -> Option<RoutingEntity> {
        self.rows(kind)
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.to_entity(kind))
    }

    pub fn entities(&self, kind: EntityKind) -> Vec<RoutingEntity> {
        let mut entities: Vec<RoutingEntity> =
            self.rows(kind).iter().map(|row| row.to_entity(kind)).collect();
        entities.sort_by(|a, b| a.name.cmp(&b.name));
        entities
    }

    /// Foreign-key checks shared by insert and update
    fn check_references(&self, kind: EntityKind, draft: &EntityDraft) -> StoreResult<()> {
        if let Some(proxy) = &draft.proxy {
            if !self.proxies.iter().any(|p| &p.name == proxy) {
                return Err(StoreError::ForeignKeyViolation {
                    kind: kind.into(),
                    target: RecordKind::Proxy,
                    reference: proxy.clone(),
                });
            }
        }
        if let (EntityKind::User, Some(ou)) = (kind, &draft.ou) {
            if !self.ous.iter().any(|row| &row.name == ou) {
                return Err(StoreError::ForeignKeyViolation {
                    kind: RecordKind::User,
                    target: RecordKind::Ou,
                    reference: ou.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn insert_entity(&mut self, kind: EntityKind, draft: &EntityDraft) -> StoreResult<RecordId> {
        if self.rows(kind).iter().any(|row| row.name == draft.name) {
            return Err(StoreError::UniqueViolation {
                kind: kind.into(),
                name: draft.name.clone(),
            });
        }
        self.check_references(kind, draft)?;

        let id = self.sequences.next(kind.into());
        let now = Utc::now();
        let mut row = EntityRow {
            id,
            name: String::new(),
            description: None,
            color: String::new(),
            proxy: None,
            mode: RoutingMode::default(),
            domains: Vec::new(),
            bypass_domains: Vec::new(),
            ou: None,
            created_at: now,
            updated_at: now,
        };
        row.apply(kind, draft);
        row.updated_at = now;
        self.rows_mut(kind).push(row);
        Ok(id)
    }

    pub fn update_entity(
        &mut self,
        kind: EntityKind,
        id: RecordId,
        draft: &EntityDraft,
    ) -> StoreResult<()> {
        let old_name = self
            .rows(kind)
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.name.clone())
            .ok_or(StoreError::MissingRow {
                kind: kind.into(),
                id,
            })?;
        if self
            .rows(kind)
            .iter()
            .any(|row| row.id != id && row.name == draft.name)
        {
            return Err(StoreError::UniqueViolation {
                kind: kind.into(),
                name: draft.name.clone(),
            });
        }
        self.check_references(kind, draft)?;

        if let Some(row) = self.rows_mut(kind).iter_mut().find(|row| row.id == id) {
            row.apply(kind, draft);
        }

        if kind == EntityKind::Ou && old_name != draft.name {
            for user in self.users.iter_mut() {
                if user.ou.as_deref() == Some(old_name.as_str()) {
                    user.ou = Some(draft.name.clone());
                }
            }
        }
        Ok(())
    }

    pub fn delete_entity(&mut self, kind: EntityKind, id: RecordId) -> StoreResult<()> {
        let name = self
            .rows(kind)
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.name.clone())
            .ok_or(StoreError::MissingRow {
                kind: kind.into(),
                id,
            })?;

        self.rows_mut(kind).retain(|row| row.id != id);

        if kind == EntityKind::Ou {
            for user in self.users.iter_mut() {
                if user.ou.as_deref() == Some(name.as_str()) {
                    user.ou = None;
                }
            }
        }
        Ok(())
    }

    // ---- settings ----

    pub fn setting(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }

    pub fn put_setting(&mut self, key: &str, value: &str) {
        self.settings.insert(key.to_string(), value.to_string());
    }
}
