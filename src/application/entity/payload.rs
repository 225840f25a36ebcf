//! Entity request payload and its validation

use crate::domain::entities::{EntityDraft, DEFAULT_COLOR};
use crate::domain::policies::input_rules;
use crate::domain::value_objects::{EntityKind, RoutingMode};
use crate::error::{PacError, PacResult};

/// Raw create/update input for an OU or user
///
/// Update is a full replace: every field is taken from the payload, except
/// that an absent `mode` keeps the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityPayload {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub proxy: Option<String>,
    pub mode: Option<RoutingMode>,
    pub domains: Vec<String>,
    pub bypass_domains: Vec<String>,
    pub ou: Option<String>,
}

impl EntityPayload {
    pub fn new(name: impl Into<String>, proxy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proxy: Some(proxy.into()),
            ..Self::default()
        }
    }

    /// Normalize and check every field; nothing is stored yet
    pub fn validate(self, kind: EntityKind) -> PacResult<ValidPayload> {
        let name = input_rules::entity_name(kind, &self.name)?;
        let proxy = input_rules::proxy_reference(kind, self.proxy.as_deref())?;
        let domains = input_rules::host_patterns("domains", &self.domains)?;
        let bypass_domains = input_rules::host_patterns("bypassDomains", &self.bypass_domains)?;

        let ou = input_rules::optional_text(self.ou.as_deref());
        if kind == EntityKind::Ou && ou.is_some() {
            return Err(PacError::validation("Only users can belong to an OU."));
        }

        let draft = EntityDraft {
            name,
            description: input_rules::optional_text(self.description.as_deref()),
            color: input_rules::optional_text(self.color.as_deref())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            proxy: Some(proxy),
            mode: RoutingMode::default(),
            domains,
            bypass_domains,
            ou,
        };
        Ok(ValidPayload {
            draft,
            mode: self.mode,
        })
    }
}

/// A payload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPayload {
    draft: EntityDraft,
    mode: Option<RoutingMode>,
}

impl ValidPayload {
    pub fn name(&self) -> &str {
        &self.draft.name
    }

    /// Final row fields, using `fallback` when no mode was requested
    pub fn into_draft(self, fallback: RoutingMode) -> EntityDraft {
        EntityDraft {
            mode: self.mode.unwrap_or(fallback),
            ..self.draft
        }
    }
}
