//! Helpers shared by unit and integration tests.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use registry_common::UserCollection;

use crate::config::{Config, StoreConfig};
use crate::store::{JsonFileStore, MemoryStore, StoreError, UserStore};
use crate::AppState;

pub fn test_config() -> Config {
    Config {
        store: StoreConfig {
            path: "memory".to_string(),
            reset_on_corrupt: false,
        },
        ..Config::default()
    }
}

/// State over an empty in-memory store.
pub fn memory_state() -> Arc<AppState> {
    Arc::new(AppState::new(test_config(), Arc::new(MemoryStore::new())))
}

/// State over a JSON file store at `path`.
pub fn file_state(path: &Path, reset_on_corrupt: bool) -> Arc<AppState> {
    let config = Config {
        store: StoreConfig {
            path: path.display().to_string(),
            reset_on_corrupt,
        },
        ..Config::default()
    };
    let store = JsonFileStore::new(path).with_reset_on_corrupt(reset_on_corrupt);
    Arc::new(AppState::new(config, Arc::new(store)))
}

/// State whose store can be read but rejects every write.
pub fn read_only_state() -> Arc<AppState> {
    Arc::new(AppState::new(test_config(), Arc::new(ReadOnlyStore)))
}

/// Store that always loads an empty collection and fails every save.
pub struct ReadOnlyStore;

#[async_trait]
impl UserStore for ReadOnlyStore {
    async fn load(&self) -> Result<UserCollection, StoreError> {
        Ok(UserCollection::new())
    }

    async fn save(&self, _collection: &UserCollection) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: self.location(),
            message: "read-only file system".to_string(),
        })
    }

    fn location(&self) -> String {
        "read-only".to_string()
    }
}
