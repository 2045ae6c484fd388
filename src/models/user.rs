use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A stored user document. `_id` is assigned by the user-service at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
        }
    }
}
