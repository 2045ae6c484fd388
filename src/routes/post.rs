use super::parse_object_id;
use crate::{
    dto::{CreatePostRequest, MessageResponse, PostResponse, UserPostsResponse},
    errors::ApiError,
    models::Post,
    states::PostServiceState,
    store::with_deadline,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

/// Gate for every post operation scoped to a user.
///
/// Unreachable user-service and unknown user stay distinct: the first is a
/// 502, the second a 404.
async fn require_user(state: &PostServiceState, user_id: &str) -> Result<(), ApiError> {
    if state.users.user_exists(user_id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("user does not exist"))
    }
}

/// GET /posts/{user_id}
///
/// Re-checks the user on every call, so posts of a deleted user answer 404
/// rather than their stale contents.
pub async fn list_user_posts(
    State(state): State<PostServiceState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserPostsResponse>, ApiError> {
    require_user(&state, &user_id).await?;

    let posts = with_deadline(state.store_timeout, state.posts.find_by_user(&user_id)).await?;

    Ok(Json(UserPostsResponse {
        user_id,
        posts: posts.into_iter().map(PostResponse::from).collect(),
    }))
}

/// POST /posts
/// Body: { "user_id": "...", "title": "...", "content": "..." }
pub async fn create_post(
    State(state): State<PostServiceState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    require_user(&state, &payload.user_id).await?;

    let post = Post::new(payload.user_id, payload.title, payload.content);
    with_deadline(state.store_timeout, state.posts.insert(&post)).await?;

    info!("Post created: {} by user {}", post.id, post.user_id);

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// DELETE /posts/{post_id}
///
/// Deliberately not gated on the owning user.
pub async fn delete_post(
    State(state): State<PostServiceState>,
    Path(post_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let object_id = parse_object_id(&post_id)?;

    let deleted = with_deadline(state.store_timeout, state.posts.delete(object_id)).await?;
    if !deleted {
        return Err(ApiError::NotFound("post not found"));
    }

    info!("Post deleted: {}", object_id);

    Ok(Json(MessageResponse::new("post deleted")))
}
