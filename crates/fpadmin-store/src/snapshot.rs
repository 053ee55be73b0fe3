use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::store::Store;
use crate::{Error, Result};

/// Format version written into every snapshot
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    store: &'a Store,
}

#[derive(Deserialize)]
struct SnapshotIn {
    version: u32,
    store: Store,
}

impl Store {
    pub fn to_snapshot_json(&self) -> Result<String> {
        let out = SnapshotOut {
            version: SNAPSHOT_VERSION,
            store: self,
        };
        Ok(serde_json::to_string_pretty(&out)?)
    }

    /// Decode a snapshot, rejecting duplicate ids and unknown versions.
    pub fn from_snapshot_json(json: &str) -> Result<Self> {
        let snapshot: SnapshotIn = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(Error::Snapshot(serde::de::Error::custom(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            ))));
        }

        let mut store = snapshot.store;
        store.verify()?;
        Ok(store)
    }

    pub fn load_snapshot(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_snapshot_json(&json)
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_snapshot_json()?)?;
        Ok(())
    }
}
