//! Application settings stored in the settings table

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RoutingMode;

/// Settings-table key the application settings live under
pub const SETTINGS_KEY: &str = "pacManagementSettings";

/// Default PAC root, matching the stock web-server layout
pub const DEFAULT_PAC_DIRECTORY: &str = "/var/www/html/pac";

/// Operator-editable settings, stored as one JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_session_timeout")]
    pub session_timeout_minutes: u32,
    #[serde(default = "default_pac_directory")]
    pub pac_directory_path: PathBuf,
    #[serde(default)]
    pub default_proxy_mode: RoutingMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            session_timeout_minutes: default_session_timeout(),
            pac_directory_path: default_pac_directory(),
            default_proxy_mode: RoutingMode::default(),
        }
    }
}

fn default_session_timeout() -> u32 {
    15
}

fn default_pac_directory() -> PathBuf {
    PathBuf::from(DEFAULT_PAC_DIRECTORY)
}
