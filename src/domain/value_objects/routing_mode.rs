//! Routing mode value object

use serde::{Deserialize, Serialize};

/// How an entity routes traffic by default
///
/// Stored as `proxyAll` / `directExcept` so existing data keeps loading.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum RoutingMode {
    /// Everything goes through the proxy; `bypass_domains` go direct
    #[default]
    #[value(alias = "proxyAll")]
    ProxyAll,
    /// Everything goes direct; `domains` go through the proxy
    #[value(alias = "directExcept")]
    DirectExcept,
}

impl RoutingMode {
    /// Wire name as stored and shown to operators
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingMode::ProxyAll => "proxyAll",
            RoutingMode::DirectExcept => "directExcept",
        }
    }
}

impl std::fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
