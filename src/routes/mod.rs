pub mod health;
pub mod post;
pub mod user;

use crate::{errors::ApiError, models::ObjectId};

/// Parses a path identifier, rejecting anything that is not 24 hex characters
/// before any store is touched.
fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}
