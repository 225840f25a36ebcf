//! Proxy management

mod use_case;

pub use use_case::{ProxyPayload, ProxyService};
