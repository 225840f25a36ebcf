//! Domain Entities
//!
//! - `Proxy` - an upstream proxy server row
//! - `RoutingEntity` - an OU or user row with its routing rules
//! - `AppSettings` - the operator settings document
//! - `PacArtifact` - a compiled PAC script and its target path

mod artifact;
mod proxy;
mod routing_entity;
mod settings;

pub use artifact::PacArtifact;
pub use proxy::{Proxy, ProxyDraft, SUPPORTED_PROTOCOLS};
pub use routing_entity::{EntityDraft, RoutingEntity, DEFAULT_COLOR};
pub use settings::{AppSettings, DEFAULT_PAC_DIRECTORY, SETTINGS_KEY};
