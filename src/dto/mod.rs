mod requests;
mod responses;

pub use requests::{CreatePostRequest, CreateUserRequest};
pub use responses::{
    ExistenceResponse, MessageResponse, PostResponse, UserPostsResponse, UserResponse,
};
