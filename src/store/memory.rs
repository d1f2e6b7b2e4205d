//! In-process store backed by a `HashMap`.
//!
//! Nothing survives the process.  Useful for tests and for wiring the
//! client up without touching the network.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{Lookup, RemoteStore};
use crate::errors::StoreError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of aliases currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }

    /// Drop a record, as a real store might at any moment.
    pub fn evict(&self, alias: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.remove(alias))
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Transport("memory store lock poisoned".into()))
    }
}

impl RemoteStore for MemoryStore {
    fn put(&self, alias: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(alias.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, alias: &str) -> Result<Lookup, StoreError> {
        Ok(match self.lock()?.get(alias) {
            Some(value) => Lookup::Found(value.clone()),
            None => Lookup::NotFound,
        })
    }
}
