//! Local persistence: a synchronous key-value string store.
//!
//! The preference store only needs `get`/`set` over string values, so the
//! backend is abstracted behind [`KeyValueStore`]. The platform impl
//! ([`LocalStore`]) maps to `localStorage` on the web and to one file per
//! key under the user's config directory on native builds.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The stored string exists but is not parseable as JSON.
    #[error("stored value for {key} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The backend rejected the write (quota, disallowed context, IO).
    #[error("failed to persist {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the key has never been written.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Platform-backed store used by the running app.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::{KeyValueStore, LocalStore, StorageError};

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = local_storage().ok_or_else(|| StorageError::Write {
                key: key.to_string(),
                reason: "localStorage unavailable".to_string(),
            })?;
            storage.set_item(key, value).map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use std::fs;
    use std::path::PathBuf;

    use super::{KeyValueStore, LocalStore, StorageError};

    fn storage_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("net", "Netwatch", "netwatch")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn key_path(key: &str) -> Option<PathBuf> {
        storage_dir().map(|dir| dir.join(format!("{key}.json")))
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            key_path(key).and_then(|path| fs::read_to_string(path).ok())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let path = key_path(key).ok_or_else(|| StorageError::Write {
                key: key.to_string(),
                reason: "no usable config directory".to_string(),
            })?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|err| StorageError::Write {
                    key: key.to_string(),
                    reason: err.to_string(),
                })?;
            }
            fs::write(&path, value).map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: err.to_string(),
            })
        }
    }
}

/// In-memory store for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
