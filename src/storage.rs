//! # Durable Store
//!
//! Where the cart snapshot survives between sessions: one serialized list of
//! [`CartLine`]s under a fixed key. Every committed cart mutation rewrites the whole
//! snapshot; there are no partial writes.

use crate::model::CartLine;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Key the cart snapshot is stored under.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Errors raised while reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Snapshot is not a valid cart: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Load/save of the cart snapshot.
pub trait DurableStore: Send + Sync {
    /// Returns the stored cart, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<CartLine>>, StorageError>;

    /// Replaces the stored cart with `lines`.
    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError>;
}

/// Snapshot kept as a JSON file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Stores the cart under [`CART_STORAGE_KEY`] inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, CART_STORAGE_KEY)
    }

    /// Stores the cart under `key` inside `dir`.
    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(file_name(key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DurableStore for FileStore {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(lines)?;

        // Readers only ever see a complete snapshot.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, raw)?;
        fs::rename(&staging, &self.path)?;
        debug!(path = %self.path.display(), lines = lines.len(), "Snapshot saved");
        Ok(())
    }
}

/// In-process key-value store holding raw JSON strings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `lines` as the cart snapshot.
    pub fn with_snapshot(lines: &[CartLine]) -> Result<Self, StorageError> {
        let store = Self::new();
        store.save(lines)?;
        Ok(store)
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: impl Into<String>) {
        self.entries.lock().insert(key.to_string(), value.into());
    }
}

impl DurableStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StorageError> {
        self.get_item(CART_STORAGE_KEY)
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(StorageError::from)
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(lines)?;
        self.set_item(CART_STORAGE_KEY, raw);
        Ok(())
    }
}

fn file_name(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{stem}.json")
}
