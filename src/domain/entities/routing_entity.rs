//! RoutingEntity - the shared shape of OUs and users
//!
//! Both kinds carry a routing mode, two ordered domain lists and a proxy
//! reference. Users may additionally belong to an OU.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntityKind, RecordId, RoutingMode};

/// Color assigned when a create request does not choose one
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// A stored OU or user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingEntity {
    pub id: RecordId,
    pub kind: EntityKind,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    /// Name of the assigned proxy; required by the services, but rows
    /// loaded from disk are not trusted to have it
    pub proxy: Option<String>,
    pub mode: RoutingMode,
    pub domains: Vec<String>,
    pub bypass_domains: Vec<String>,
    /// Owning OU (users only)
    pub ou: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoutingEntity {
    /// The list the current mode consults; the other list is kept but unused
    pub fn active_domains(&self) -> &[String] {
        match self.mode {
            RoutingMode::DirectExcept => &self.domains,
            RoutingMode::ProxyAll => &self.bypass_domains,
        }
    }
}

/// Validated field set for inserting or replacing an entity row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDraft {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub proxy: Option<String>,
    pub mode: RoutingMode,
    pub domains: Vec<String>,
    pub bypass_domains: Vec<String>,
    pub ou: Option<String>,
}

impl EntityDraft {
    /// Minimal draft routed through `proxy` in the default mode
    pub fn new(name: impl Into<String>, proxy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            color: DEFAULT_COLOR.to_string(),
            proxy: Some(proxy.into()),
            mode: RoutingMode::default(),
            domains: Vec::new(),
            bypass_domains: Vec::new(),
            ou: None,
        }
    }

    pub fn with_mode(mut self, mode: RoutingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains = domains;
        self
    }

    pub fn with_bypass_domains(mut self, bypass: Vec<String>) -> Self {
        self.bypass_domains = bypass;
        self
    }

    pub fn with_ou(mut self, ou: Option<String>) -> Self {
        self.ou = ou;
        self
    }
}
