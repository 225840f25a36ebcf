//! pacsmith - PAC file generator for OU and user routing policies
//!
//! pacsmith keeps a small record store of upstream proxies, organizational
//! units and users. Every OU and user owns one Proxy Auto-Configuration
//! script on disk, and each create, update or delete that succeeds leaves
//! that file in step with its row.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::services::compile;
pub use error::{PacError, PacResult};
