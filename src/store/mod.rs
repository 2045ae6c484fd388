//! Document persistence for the two services.
//!
//! Each service owns exactly one collection and talks to it through a small
//! async trait, so handlers can run against MongoDB in production and an
//! in-memory map in tests.

mod memory;
mod mongo;

use crate::models::{ObjectId, Post, User};
use async_trait::async_trait;
use std::{future::Future, time::Duration};

pub use memory::{MemoryPostStore, MemoryUserStore};
pub use mongo::{MongoPostStore, MongoUserStore, connect};

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mongodb: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Persistence capability owned by the user-service.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Returns `false` when no document had that id.
    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError>;

    /// Number of documents with that id. Used for existence checks so the
    /// full record never leaves the store.
    async fn count(&self, id: ObjectId) -> Result<u64, StoreError>;
}

/// Persistence capability owned by the post-service.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Post>, StoreError>;

    async fn insert(&self, post: &Post) -> Result<(), StoreError>;

    /// Returns `false` when no document had that id.
    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError>;
}

/// Runs a store operation under a deadline. On expiry the operation is
/// dropped and reported as [`StoreError::Timeout`].
pub async fn with_deadline<T, F>(limit: Duration, op: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(limit, op)
        .await
        .map_err(|_| StoreError::Timeout(limit))?
}
