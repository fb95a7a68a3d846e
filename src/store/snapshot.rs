//! Durable key-value snapshot storage.
//!
//! The engine persists each collection as one serialized JSON array under
//! its collection name, mirroring the original application's browser
//! local-storage layout. Implementations only need string get/set.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{RosterError, RosterResult};

/// A durable key-value store holding one serialized entry per collection.
///
/// Keys are collection names (`staff`, `shifts`, `availabilities`, `users`,
/// `timesheets`); values are JSON arrays. `get` returning `None` means the
/// collection has never been persisted and triggers seed initialization.
pub trait SnapshotStore {
    /// Reads the serialized entry for a collection, if one exists.
    fn get(&self, key: &str) -> RosterResult<Option<String>>;

    /// Overwrites the serialized entry for a collection.
    fn set(&mut self, key: &str, value: &str) -> RosterResult<()>;
}

/// An in-memory snapshot store backed by a `HashMap`.
///
/// Used in tests and anywhere durability is not required.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: HashMap<String, String>,
}

impl MemorySnapshotStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with entries, for simulating an
    /// existing snapshot.
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn get(&self, key: &str) -> RosterResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> RosterResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A snapshot store writing one `<key>.json` file per collection under a
/// directory.
///
/// This is the durable analog of the original's browser local storage: each
/// collection is overwritten whole on every write.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> RosterResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| RosterError::Storage {
            key: dir.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn get(&self, key: &str) -> RosterResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RosterError::Storage {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> RosterResult<()> {
        fs::write(self.path_for(key), value).map_err(|e| RosterError::Storage {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
