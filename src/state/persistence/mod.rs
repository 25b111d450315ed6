pub mod sqlite_persistence;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use crate::entry::Collection;
pub use sqlite_persistence::SqliteBackend;

pub const STORAGE_KEY: &str = "@toDos";

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("failed to open storage: {0}")]
    Open(String),
    #[error("failed to read from storage: {0}")]
    Read(String),
    #[error("failed to write to storage: {0}")]
    Write(String),
    #[error("failed to serialize collection: {0}")]
    Format(String),
}

#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored collection is malformed: {0}")]
    Deserialization(String),
}

/// String key-value storage. `set` must replace the previous value in one
/// step: readers see either the old value or the new one.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn Backend>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl Store {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    // Without a database the app still runs, it just forgets on exit.
    pub async fn open_default() -> Self {
        let path = SqliteBackend::default_path();

        match SqliteBackend::open(&path).await {
            Ok(backend) => {
                tracing::info!("Data saved at: {}", path.display());
                Self::new(backend)
            }
            Err(error) => {
                tracing::warn!(%error, "falling back to in-memory storage, changes will not persist");
                Self::new(MemoryBackend::default())
            }
        }
    }

    pub async fn try_load(&self) -> Result<Collection, LoadError> {
        let Some(contents) = self.backend.get(STORAGE_KEY).await? else {
            return Ok(Collection::new());
        };

        serde_json::from_str(&contents).map_err(|error| LoadError::Deserialization(error.to_string()))
    }

    /// Any failure is logged and treated as an empty collection.
    pub async fn load(&self) -> Collection {
        match self.try_load().await {
            Ok(collection) => {
                tracing::debug!(entries = collection.len(), "loaded collection");
                collection
            }
            Err(error) => {
                tracing::warn!(%error, "could not load collection, starting empty");
                Collection::new()
            }
        }
    }

    pub async fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        let json = serde_json::to_string(collection)
            .map_err(|error| StorageError::Format(error.to_string()))?;

        self.backend.set(STORAGE_KEY, &json).await?;

        tracing::debug!(entries = collection.len(), "saved collection");
        Ok(())
    }
}
