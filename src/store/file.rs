//! Local JSON file store.
//!
//! Keeps `alias -> { value, stored_at }` in a single JSON file.  Handy
//! for offline use and for exercising the CLI without the network.
//!
//! A missing file is an empty store.  Every `put` rewrites the whole
//! file through a temp file + rename, so readers never see a half-written
//! file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Lookup, RemoteStore};
use crate::errors::StoreError;

/// A single stored blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    value: String,
    stored_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, StoredRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents)
            .map_err(|e| StoreError::Serialization(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, records: &BTreeMap<String, StoredRecord>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

impl RemoteStore for FileStore {
    fn put(&self, alias: &str, value: &str) -> Result<(), StoreError> {
        let mut records = self.load()?;
        records.insert(
            alias.to_string(),
            StoredRecord {
                value: value.to_string(),
                stored_at: Utc::now(),
            },
        );
        self.save(&records)?;

        tracing::debug!(alias, path = %self.path.display(), "stored blob in file store");
        Ok(())
    }

    fn get(&self, alias: &str) -> Result<Lookup, StoreError> {
        let lookup = match self.load()?.remove(alias) {
            Some(record) => Lookup::Found(record.value),
            None => Lookup::NotFound,
        };

        tracing::debug!(
            alias,
            found = matches!(lookup, Lookup::Found(_)),
            "file store lookup"
        );
        Ok(lookup)
    }
}
