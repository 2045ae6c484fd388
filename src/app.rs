use crate::{
    routes::{health, post, user},
    states::{PostServiceState, UserServiceState},
};
use axum::{
    Router,
    routing::{delete, get, post as post_method},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// User-service routes
pub fn user_router(state: UserServiceState) -> Router {
    let router = Router::new()
        .route("/ping", get(health::user_ping))
        .route("/users", get(user::list_users).post(user::create_user))
        .route("/users/{id}", delete(user::delete_user))
        // Existence check consumed by the post-service
        .route("/users/exists/{id}", get(user::user_exists))
        .with_state(state);

    with_middleware(router)
}

/// Post-service routes
///
/// `/posts/{id}` is a user id for GET and a post id for DELETE.
pub fn post_router(state: PostServiceState) -> Router {
    let router = Router::new()
        .route("/ping", get(health::post_ping))
        .route("/posts", post_method(post::create_post))
        .route(
            "/posts/{id}",
            get(post::list_user_posts).delete(post::delete_post),
        )
        .with_state(state);

    with_middleware(router)
}

/// Request tracing and permissive CORS, shared by both services.
fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
}
