/// GET /ping
pub async fn user_ping() -> &'static str {
    "user pong"
}

/// GET /ping
pub async fn post_ping() -> &'static str {
    "post pong"
}
