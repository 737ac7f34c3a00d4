use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::{fs, sync::Mutex};

use crate::errors::{StoreReadFailed, StoreWriteFailed};

/// String key-value persistence primitive backing the receipt history.
#[async_trait]
pub trait KeyValueDatasource: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ServerError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), ServerError>;
}

// File-backed.
// ---

/// Stores each key as `<dir>/<key>.json`. Writes go to a temporary sibling
/// file first and are renamed into place, so readers never observe a
/// half-written value.
#[derive(Debug, Clone)]
pub struct FileKeyValueDatasource {
    dir: PathBuf,
}

impl FileKeyValueDatasource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_stem))
    }
}

#[async_trait]
impl KeyValueDatasource for FileKeyValueDatasource {
    async fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreReadFailed::with_debug(key, &e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreWriteFailed::with_debug(key, &e))?;
        fs::write(&tmp, value)
            .await
            .map_err(|e| StoreWriteFailed::with_debug(key, &e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreWriteFailed::with_debug(key, &e))?;
        Ok(())
    }
}

// In-memory.
// ---

#[derive(Debug, Default)]
pub struct MemoryKeyValueDatasource {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueDatasource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueDatasource for MemoryKeyValueDatasource {
    async fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_store_round_trips_and_reports_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueDatasource::new(dir.path().join("nested"));

        assert_eq!(store.get("receipts").await.unwrap(), None);
        store.set("receipts", "[1,2,3]").await.unwrap();
        assert_eq!(store.get("receipts").await.unwrap().as_deref(), Some("[1,2,3]"));
        store.set("receipts", "[]").await.unwrap();
        assert_eq!(store.get("receipts").await.unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("nested/receipts.json.tmp").exists());
    }

    #[tokio::test]
    async fn file_store_keeps_keys_inside_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueDatasource::new(dir.path());
        store.set("../escape", "x").await.unwrap();
        assert!(dir.path().join("___escape.json").exists());
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryKeyValueDatasource::new();
        assert_eq!(store.get("k").await.unwrap(), None);
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
