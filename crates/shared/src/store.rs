use std::{fs, path::PathBuf};

use serde::{Serialize, de::DeserializeOwned};

pub const USERS_KEY: &str = "users_db";
pub const TASKS_KEY: &str = "tasks_db";

/// Directory of JSON documents, one per key, holding ordered collections.
///
/// Every read goes to disk so callers always observe the latest snapshot.
/// There is no locking: two writers racing on the same key lose one update.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the collection stored under `key`; a missing key is an empty
    /// collection.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> crate::Result<Vec<T>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(vec![]);
        }

        let raw = fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(vec![]);
        }

        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write<T: Serialize>(&self, key: &str, items: &[T]) -> crate::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(key, count = items.len(), "snapshot written");

        Ok(())
    }
}
