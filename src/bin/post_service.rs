use anyhow::Context;
use record_services::{
    PostServiceState,
    config::{PostServiceConfig, StoreBackend},
    directory::HttpUserDirectory,
    post_router,
    store::{self, MemoryPostStore, MongoPostStore, PostStore},
    telemetry,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = PostServiceConfig::from_env()?;
    let service = &config.service;

    let posts: Arc<dyn PostStore> = match service.store_backend {
        StoreBackend::Mongo => {
            let database = store::connect(&service.mongo_uri, &service.database)
                .await
                .with_context(|| format!("connecting to {}", service.mongo_uri))?;
            Arc::new(MongoPostStore::new(&database))
        }
        StoreBackend::Memory => Arc::new(MemoryPostStore::new()),
    };

    let users = HttpUserDirectory::new(&config.user_service_url, config.user_service_timeout)?;
    info!("Checking users against {}", users.base_url());

    let state =
        PostServiceState::new(posts, Arc::new(users)).with_store_timeout(service.store_timeout);
    let app = post_router(state);

    let addr = format!("0.0.0.0:{}", service.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("Post service running on http://{} ({:?} store)", addr, service.store_backend);
    info!("  GET    /ping");
    info!("  GET    /posts/{{user_id}}");
    info!("  POST   /posts");
    info!("  DELETE /posts/{{post_id}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down post service");
    }
}
