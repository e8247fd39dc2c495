use async_trait::async_trait;
use registry_common::UserCollection;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};

/// Non-durable store, used by tests and throwaway instances.
#[derive(Default)]
pub struct MemoryStore {
    collection: RwLock<UserCollection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: UserCollection) -> Self {
        Self {
            collection: RwLock::new(collection),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn load(&self) -> Result<UserCollection, StoreError> {
        Ok(self.collection.read().await.clone())
    }

    async fn save(&self, collection: &UserCollection) -> Result<(), StoreError> {
        *self.collection.write().await = collection.clone();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
