use super::{PostStore, StoreError, UserStore};
use crate::models::{ObjectId, Post, User};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Client, Collection, Database, bson::doc};
use tracing::info;

pub const USERS_COLLECTION: &str = "users";
pub const POSTS_COLLECTION: &str = "posts";

/// Opens a client for `uri` and checks the deployment answers a ping.
pub async fn connect(uri: &str, database: &str) -> Result<Database, StoreError> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database(database);
    database.run_command(doc! { "ping": 1 }).await?;

    info!("Connected to MongoDB database {}", database.name());
    Ok(database)
}

#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.collection.insert_one(user).await?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn count(&self, id: ObjectId) -> Result<u64, StoreError> {
        Ok(self.collection.count_documents(doc! { "_id": id }).await?)
    }
}

#[derive(Clone)]
pub struct MongoPostStore {
    collection: Collection<Post>,
}

impl MongoPostStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(POSTS_COLLECTION),
        }
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Post>, StoreError> {
        let cursor = self.collection.find(doc! { "user_id": user_id }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, post: &Post) -> Result<(), StoreError> {
        self.collection.insert_one(post).await?;
        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
