use crate::models::{Post, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_hex(),
            user_id: post.user_id,
            title: post.title,
            content: post.content,
        }
    }
}

/// GET /posts/{user_id} body
#[derive(Debug, Serialize, Deserialize)]
pub struct UserPostsResponse {
    pub user_id: String,
    pub posts: Vec<PostResponse>,
}

/// Answer of the user-service existence check.
///
/// Both services speak this shape: the user-service serializes it and the
/// post-service decodes it. `id` echoes the path parameter verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExistenceResponse {
    pub id: String,
    pub exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
