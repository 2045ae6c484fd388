use super::{PostStore, StoreError, UserStore};
use crate::models::{ObjectId, Post, User};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// `DashMap` backed user collection for standalone runs and tests.
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<ObjectId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // ObjectIds grow with creation time
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        Ok(self.users.remove(&id).is_some())
    }

    async fn count(&self, id: ObjectId) -> Result<u64, StoreError> {
        Ok(u64::from(self.users.contains_key(&id)))
    }
}

/// `DashMap` backed post collection for standalone runs and tests.
#[derive(Clone, Default)]
pub struct MemoryPostStore {
    posts: Arc<DashMap<ObjectId, Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Post>, StoreError> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();

        posts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(posts)
    }

    async fn insert(&self, post: &Post) -> Result<(), StoreError> {
        self.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        Ok(self.posts.remove(&id).is_some())
    }
}
