//! HTTP server for crisisd.

use crate::gemini::GenerativeModel;
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
///
/// Immutable after construction: the handlers coordinate nothing, so there
/// are no locks here.
pub struct AppState {
    /// The one outbound capability. A trait object so tests can stub it.
    pub model: Arc<dyn GenerativeModel>,
    /// Model identifier reported by `/health`.
    pub model_id: String,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>, model_id: impl Into<String>) -> Self {
        Self {
            model,
            model_id: model_id.into(),
        }
    }
}

/// Assemble the router. Split out of `run` so tests can drive it directly.
pub fn router(state: AppState) -> Router {
    // The companion app is served from another origin (or an emulator), so
    // CORS must stay wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::info_routes())
        .merge(routes::advice_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the HTTP server until the process is stopped.
pub async fn run(bind_addr: &str, state: AppState) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("  Listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
