//! Pomodoro Forest HTTP API.
//!
//! Every `/api` route needs the `x-forest-user` header set by the authenticating
//! gateway in front of this server.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod state;

pub use auth::{CurrentUser, USER_HEADER};
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::routing::{get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::models::ServerConfig;

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/start-pomodoro", post(handlers::start_pomodoro))
        .route("/api/complete-pomodoro", post(handlers::complete_pomodoro))
        .route("/api/motivational-phrase", get(handlers::motivational_phrase))
        .route("/api/trees", get(handlers::list_trees))
        .route(
            "/api/trees/{id}",
            put(handlers::update_tree).delete(handlers::delete_tree),
        )
        .route("/api/user/stats", get(handlers::user_stats))
        .route("/api/user/stats/update", post(handlers::update_user_stats))
        .route(
            "/api/admin/tree-templates",
            get(handlers::list_templates).post(handlers::create_template),
        )
        .route(
            "/api/admin/tree-templates/{id}",
            put(handlers::update_template).delete(handlers::delete_template),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Forest HTTP Server.
pub struct ForestHttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl ForestHttpServer {
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Start the server, stopping once `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = router(self.state);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "Pomodoro Forest API listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("server stopped");
        Ok(())
    }
}
