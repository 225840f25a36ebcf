//! Application settings, stored as one JSON document in the settings table

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{AppSettings, SETTINGS_KEY};
use crate::domain::policies::input_rules;
use crate::domain::ports::{RecordStore, StoreError};
use crate::error::PacResult;

pub struct SettingsService {
    store: Arc<dyn RecordStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Stored settings, or the defaults when none were saved yet
    pub fn load(&self) -> PacResult<AppSettings> {
        match self.store.get_setting(SETTINGS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json).map_err(|e| {
                StoreError::Serialization {
                    message: format!("setting {SETTINGS_KEY}: {e}"),
                }
            })?),
            None => Ok(AppSettings::default()),
        }
    }

    pub fn save(&self, settings: &AppSettings) -> PacResult<()> {
        input_rules::settings(settings)?;
        let json = serde_json::to_string(settings).map_err(|e| StoreError::Serialization {
            message: e.to_string(),
        })?;
        self.store.put_setting(SETTINGS_KEY, &json)?;
        info!(key = SETTINGS_KEY, "settings saved");
        Ok(())
    }

    /// Store the defaults if nothing is stored yet; returns whether it did
    pub fn ensure_defaults(&self) -> PacResult<bool> {
        if self.store.get_setting(SETTINGS_KEY)?.is_some() {
            return Ok(false);
        }
        self.save(&AppSettings::default())?;
        Ok(true)
    }
}
