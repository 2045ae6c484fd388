//! User and post record services.
//!
//! The user-service owns user documents and answers existence checks; the
//! post-service owns post documents and asks the user-service whether a user
//! exists before creating or listing posts for it. The dependency only runs
//! from posts to users.

pub mod app;
pub mod config;
pub mod directory;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;
pub mod telemetry;

pub use app::{post_router, user_router};
pub use states::{PostServiceState, UserServiceState};
