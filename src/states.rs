use crate::{
    directory::UserDirectory,
    store::{DEFAULT_STORE_TIMEOUT, PostStore, UserStore},
};
use std::{sync::Arc, time::Duration};

// ============================================================================
// APPLICATION STATE - handles injected into every request
// ============================================================================
/// The store handle is `Arc` so each request gets a cheap clone; the store
/// does its own concurrency control, nothing here is locked.
#[derive(Clone)]
pub struct UserServiceState {
    pub users: Arc<dyn UserStore>,
    pub store_timeout: Duration,
}

impl UserServiceState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            users,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }
}

#[derive(Clone)]
pub struct PostServiceState {
    pub posts: Arc<dyn PostStore>,
    pub users: Arc<dyn UserDirectory>,
    pub store_timeout: Duration,
}

impl PostServiceState {
    pub fn new(posts: Arc<dyn PostStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            posts,
            users,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }
}
