use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A stored post document.
///
/// `user_id` is a foreign reference into the user-service. It is checked
/// against the user-service when the post is created, never afterwards, so it
/// may dangle once the user is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            user_id: user_id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
