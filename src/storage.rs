//! Durable session slot.
//!
//! The identity store persists the current actor under a single key so
//! a restarted client can restore its session without re-login. The
//! slot is a plain key/value surface: the file-backed implementation
//! is what the desktop shell uses, the in-memory one backs tests and
//! shells without filesystem access.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Errors from session slot operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════
// SessionStore trait
// ═══════════════════════════════════════════════════════════

/// A durable key/value slot for serialized session state.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove the value under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ═══════════════════════════════════════════════════════════
// File-backed store
// ═══════════════════════════════════════════════════════════

/// Session slot persisted as one JSON object in a file under the app
/// data directory. Keys map to top-level fields of that object.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by the default session file (`config::session_file`).
    pub fn new() -> Self {
        Self::at(crate::config::session_file())
    }

    /// Store backed by an explicit path (tests, custom shells).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// In-memory store
// ═══════════════════════════════════════════════════════════

/// Volatile session slot. Nothing survives the process.
pub struct MemorySessionStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            map: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .map
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut map) = self.map.lock() {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if let Ok(mut map) = self.map.lock() {
            map.remove(key);
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
