use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::AppError;

/// Durable JSON key-value store, one file per key under a root directory.
///
/// Values are loaded on read and rewritten whole on every mutation; there is
/// no partial-write guarantee. A missing or unparseable value reads as the
/// type's default — corrupt data is logged and treated as empty, never as an
/// error. All access serializes behind one lock, making this process the
/// single writer; concurrent processes sharing the directory race
/// last-write-wins.
pub struct JsonStore {
    dir: PathBuf,
    guard: Mutex<()>,
}

impl JsonStore {
    pub fn open(dir: &Path) -> Result<Self, AppError> {
        fs::create_dir_all(dir)
            .map_err(|e| AppError::Persistence(format!("Failed to create store directory {}: {}", dir.display(), e)))?;

        Ok(JsonStore {
            dir: dir.to_path_buf(),
            guard: Mutex::new(()),
        })
    }

    pub fn get<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let _held = self.guard.lock();
        let path = self.key_path(key);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                warn!(key, error = %e, "Store read failed, treating value as empty");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Store value is not valid JSON, treating as empty");
                T::default()
            }
        }
    }

    pub fn put<T>(&self, key: &str, value: &T) -> Result<(), AppError>
    where
        T: Serialize + ?Sized,
    {
        let _held = self.guard.lock();
        let path = self.key_path(key);

        let encoded = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Persistence(format!("Failed to encode key {}: {}", key, e)))?;

        fs::write(&path, encoded)
            .map_err(|e| AppError::Persistence(format!("Failed to write key {}: {}", key, e)))
    }

    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        let _held = self.guard.lock();
        let path = self.key_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Persistence(format!("Failed to remove key {}: {}", key, e))),
        }
    }

    /// Cheap liveness probe for the health endpoint.
    pub fn probe(&self) -> Result<(), AppError> {
        let _held = self.guard.lock();
        fs::metadata(&self.dir)
            .map(|_| ())
            .map_err(|e| AppError::Persistence(format!("Store directory unavailable: {}", e)))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}
