//! Entity kind value objects - which table a record lives in

use serde::{Deserialize, Serialize};

/// The two routing-policy holders that own a PAC artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Organizational unit
    Ou,
    /// Individual user
    User,
}

impl EntityKind {
    /// Every kind, in artifact-generation order
    pub const ALL: [EntityKind; 2] = [EntityKind::Ou, EntityKind::User];

    /// Label used inside sentences ("OU", "user")
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Ou => "OU",
            EntityKind::User => "user",
        }
    }

    /// Capitalized name for headings
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Ou => "OU",
            EntityKind::User => "User",
        }
    }

    /// Subdirectory of the PAC root holding this kind's artifacts
    pub fn artifact_subdir(&self) -> Option<&'static str> {
        match self {
            EntityKind::Ou => None,
            EntityKind::User => Some("users"),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Ou => write!(f, "ou"),
            EntityKind::User => write!(f, "user"),
        }
    }
}

/// Every table with a unique `name` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Proxy,
    Ou,
    User,
}

impl RecordKind {
    /// Name of the backing table
    pub fn table_name(&self) -> &'static str {
        match self {
            RecordKind::Proxy => "proxies",
            RecordKind::Ou => "ous",
            RecordKind::User => "users",
        }
    }

    /// Capitalized name for messages
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordKind::Proxy => "Proxy",
            RecordKind::Ou => "OU",
            RecordKind::User => "User",
        }
    }

    /// Name with indefinite article ("an OU", "a user")
    pub fn article_name(&self) -> &'static str {
        match self {
            RecordKind::Proxy => "a proxy",
            RecordKind::Ou => "an OU",
            RecordKind::User => "a user",
        }
    }
}

impl From<EntityKind> for RecordKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Ou => RecordKind::Ou,
            EntityKind::User => RecordKind::User,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table_name())
    }
}
