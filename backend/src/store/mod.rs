//! Persistence for the user collection.
//!
//! A store reads and writes the whole collection at once; there is no
//! per-record access.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use registry_common::UserCollection;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
    #[error("Store file {path} is not valid JSON: {message}")]
    Corrupt { path: String, message: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Whole-collection persistence backend.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Prepare the backing storage. Called once before serving.
    async fn init(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Read the full collection.
    async fn load(&self) -> Result<UserCollection, StoreError>;

    /// Replace the full collection.
    async fn save(&self, collection: &UserCollection) -> Result<(), StoreError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}
