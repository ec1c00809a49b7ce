//! Homedash Web Server
//!
//! Axum-based REST API for app shortcuts plus a WebSocket push channel.

pub mod broadcast;
pub mod error;
pub mod routes;
pub mod state;
pub mod websocket;

use axum::{
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::AppState;

/// Where and how to run the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5005,
            db_path: PathBuf::from("./data/db.sqlite"),
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/apps",
            get(routes::apps::list_apps).post(routes::apps::create_app),
        )
        .route(
            "/apps/{id}",
            get(routes::apps::get_app)
                .put(routes::apps::update_app)
                .delete(routes::apps::delete_app),
        )
        .route("/apps/{id}/pin", post(routes::apps::toggle_pin));

    Router::new()
        .route("/health", get(routes::health))
        .nest("/api", api_routes)
        .route("/ws", get(websocket::ws_handler))
        .route("/internal/notify", post(routes::internal::notify))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    run_server_until(config, shutdown_signal()).await
}

/// Run the web server until `shutdown` resolves, then close the push channel
/// and wait for in-flight requests.
pub async fn run_server_until<S>(config: ServerConfig, shutdown: S) -> anyhow::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let db = Arc::new(homedash_db::init_pool(&config.db_path)?);
    let state = AppState::new(db);
    let broadcaster = state.broadcaster.clone();
    let app = create_router(state);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            broadcaster.close();
        })
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
