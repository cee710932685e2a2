//! Durable key-value storage for taskpad
//!
//! Persistence goes through the `KeyValueStore` trait: string keys, string
//! values, synchronous writes. A `save` is observable by the next `load` in
//! the same process. A corrupt or unavailable medium degrades to "absent" —
//! callers must treat a missing key and a never-saved key identically, so
//! storage trouble can never poison in-memory state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub trait KeyValueStore {
    /// Read the value last saved under `key`, or `None` if the key was
    /// never saved or the medium could not produce it.
    fn load(&self, key: &str) -> Option<String>;

    /// Overwrite the value under `key`. Best-effort: failures are logged
    /// and swallowed, never surfaced to the caller.
    fn save(&self, key: &str, value: &str);
}

/// File-backed store: each key becomes one file inside a root directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    /// Directory creation is best-effort; a store over an uncreatable
    /// directory simply loads nothing and drops every save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %e, "could not create store directory");
        }
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value, treating as absent");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path_for(key), value) {
            warn!(key, error = %e, "failed to persist value");
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
