//! Flat-file store: one pretty-printed JSON document holding `{ "users": [...] }`.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use registry_common::UserCollection;

use super::{StoreError, UserStore};

/// Store backed by a single JSON file.
///
/// Writes go to `<path>.tmp` and are renamed over the target, so readers see
/// either the old or the new document. Nothing coordinates separate processes
/// sharing one file.
pub struct JsonFileStore {
    path: PathBuf,
    /// Treat an unparseable file as empty instead of failing.
    reset_on_corrupt: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            reset_on_corrupt: false,
        }
    }

    pub fn with_reset_on_corrupt(mut self, reset: bool) -> Self {
        self.reset_on_corrupt = reset;
        self
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, e: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.display_path(),
            message: e.to_string(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    async fn write(&self, collection: &UserCollection) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(collection)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, data)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn init(&self) -> Result<(), StoreError> {
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => {
                tracing::info!("Using users data file: {}", self.display_path());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write(&UserCollection::new()).await?;
                tracing::info!("Created users data file: {}", self.display_path());
                Ok(())
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    async fn load(&self) -> Result<UserCollection, StoreError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let empty = UserCollection::new();
                self.write(&empty).await?;
                return Ok(empty);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_str(&data) {
            Ok(collection) => Ok(collection),
            Err(e) if self.reset_on_corrupt => {
                tracing::warn!(
                    "Users data file {} is unreadable ({}), treating it as empty",
                    self.display_path(),
                    e
                );
                Ok(UserCollection::new())
            }
            Err(e) => Err(StoreError::Corrupt {
                path: self.display_path(),
                message: e.to_string(),
            }),
        }
    }

    async fn save(&self, collection: &UserCollection) -> Result<(), StoreError> {
        self.write(collection).await
    }

    fn location(&self) -> String {
        self.display_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use registry_common::UserRecord;
    use tempfile::TempDir;

    fn record(id: &str, email: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            username: "user".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            registered_at: Utc::now(),
            extra: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_creates_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("users.json");
        let store = JsonFileStore::new(&path);

        let collection = store.load().await.unwrap();
        assert!(collection.is_empty());

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "{\n  \"users\": []\n}");
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));

        let collection = UserCollection {
            users: vec![record("2", "b@x.com"), record("1", "a@x.com")],
        };
        store.save(&collection).await.unwrap();

        let loaded = store.load().await.unwrap();
        let ids: Vec<&str> = loaded.users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_fails_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_corrupt_file_resets_when_configured() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path).with_reset_on_corrupt(true);
        assert!(store.load().await.unwrap().is_empty());
        // The file is left alone until the next save.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn test_init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(&path);
        store
            .save(&UserCollection {
                users: vec![record("1", "a@x.com")],
            })
            .await
            .unwrap();

        store.init().await.unwrap();
        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
