//! In-memory record store for tests

use std::sync::Mutex;

use super::tables::Tables;
use super::TableAccess;
use crate::domain::ports::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    tables: Mutex<Tables>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableAccess for InMemoryRecordStore {
    fn read<T>(&self, f: impl FnOnce(&Tables) -> StoreResult<T>) -> StoreResult<T> {
        let tables = self.tables.lock().map_err(|_| poisoned())?;
        f(&tables)
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut Tables) -> StoreResult<T>) -> StoreResult<T> {
        let mut tables = self.tables.lock().map_err(|_| poisoned())?;
        let mut working = tables.clone();
        let value = f(&mut working)?;
        *tables = working;
        Ok(value)
    }
}

fn poisoned() -> StoreError {
    StoreError::Access {
        message: "in-memory store lock poisoned".to_string(),
    }
}
