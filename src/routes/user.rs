use super::parse_object_id;
use crate::{
    dto::{CreateUserRequest, ExistenceResponse, MessageResponse, UserResponse},
    errors::ApiError,
    models::User,
    states::UserServiceState,
    store::with_deadline,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;

/// GET /users
pub async fn list_users(
    State(state): State<UserServiceState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = with_deadline(state.store_timeout, state.users.list()).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users
/// Body: { "name": "..." }
pub async fn create_user(
    State(state): State<UserServiceState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(payload) = payload?;

    let user = User::new(payload.name);
    with_deadline(state.store_timeout, state.users.insert(&user)).await?;

    info!("User created: {}", user.id);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// DELETE /users/{id}
///
/// Posts referencing the user are left in place.
pub async fn delete_user(
    State(state): State<UserServiceState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let object_id = parse_object_id(&id)?;

    let deleted = with_deadline(state.store_timeout, state.users.delete(object_id)).await?;
    if !deleted {
        return Err(ApiError::NotFound("user not found"));
    }

    info!("User deleted: {}", object_id);

    Ok(Json(MessageResponse::new("deleted successfully")))
}

/// GET /users/exists/{id}
///
/// Absence is a normal answer (`exists: false`, 200), not an error.
pub async fn user_exists(
    State(state): State<UserServiceState>,
    Path(id): Path<String>,
) -> Result<Json<ExistenceResponse>, ApiError> {
    let object_id = parse_object_id(&id)?;

    let count = with_deadline(state.store_timeout, state.users.count(object_id)).await?;

    Ok(Json(ExistenceResponse {
        id,
        exists: count > 0,
    }))
}
