//! Application state - shared across all handlers.

use std::sync::Arc;

use actix_web::web;
use anyhow::Context;

use folio_core::ports::KeyValueStore;
use folio_core::{PostStore, StoreError};
use folio_core::seed;
use folio_infra::{FileStore, InMemoryStore};

use crate::config::{AppConfig, StorageConfig};
use crate::middleware::error::AppResult;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
}

impl AppState {
    /// Open the configured storage, load the seed and initialize the store.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStore> = match &config.storage {
            StorageConfig::Memory => {
                tracing::warn!("Using in-memory storage - posts are lost on restart");
                Arc::new(InMemoryStore::new())
            }
            StorageConfig::File { data_dir } => Arc::new(
                FileStore::open(data_dir)
                    .with_context(|| format!("opening data directory {}", data_dir.display()))?,
            ),
        };

        let seed = match &config.seed_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading seed file {}", path.display()))?;
                seed::parse(&raw).with_context(|| format!("parsing seed file {}", path.display()))?
            }
            None => seed::bundled()?,
        };

        let store = PostStore::new(storage, seed);
        let seeded = store.initialize()?;

        tracing::info!(seeded, "Application state initialized");
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: PostStore) -> Self {
        Self {
            posts: Arc::new(store),
        }
    }

    /// Run a post store operation on the blocking thread pool; storage
    /// writes may sync to disk.
    pub async fn with_posts<T, F>(&self, op: F) -> AppResult<T>
    where
        F: FnOnce(&PostStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let posts = self.posts.clone();
        Ok(web::block(move || op(&posts)).await??)
    }
}
