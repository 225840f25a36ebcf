//! Proxy entity - an upstream proxy server definition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RecordId;

/// Protocols accepted when a proxy is created or updated
pub const SUPPORTED_PROTOCOLS: [&str; 4] = ["http", "https", "socks4", "socks5"];

/// A stored proxy row
///
/// `protocol` stays a plain string: rows written by older tools or edited by
/// hand may carry anything, and only PAC compilation decides whether it is
/// usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proxy {
    pub id: RecordId,
    pub name: String,
    pub protocol: String,
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Proxy {
    /// `host:port`, bracketing bare IPv6 literals
    pub fn endpoint(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }
}

/// Validated field set for inserting or replacing a proxy row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyDraft {
    pub name: String,
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}
