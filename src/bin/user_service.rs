use anyhow::Context;
use record_services::{
    UserServiceState,
    config::{ServiceConfig, StoreBackend, USER_SERVICE_PORT},
    store::{self, MemoryUserStore, MongoUserStore, UserStore},
    telemetry, user_router,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = ServiceConfig::from_env(USER_SERVICE_PORT)?;

    let users: Arc<dyn UserStore> = match config.store_backend {
        StoreBackend::Mongo => {
            let database = store::connect(&config.mongo_uri, &config.database)
                .await
                .with_context(|| format!("connecting to {}", config.mongo_uri))?;
            Arc::new(MongoUserStore::new(&database))
        }
        StoreBackend::Memory => Arc::new(MemoryUserStore::new()),
    };

    let state = UserServiceState::new(users).with_store_timeout(config.store_timeout);
    let app = user_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("User service running on http://{} ({:?} store)", addr, config.store_backend);
    info!("  GET    /ping");
    info!("  GET    /users");
    info!("  POST   /users");
    info!("  DELETE /users/{{id}}");
    info!("  GET    /users/exists/{{id}}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down user service");
    }
}
