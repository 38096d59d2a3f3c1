//! Classroom crisis daemon - AI backend for teacher crisis management.
//!
//! Accepts crisis descriptions from the companion app, forwards
//! context-augmented prompts to the model, and returns structured advice.

use anyhow::Result;
use crisisd::config::Config;
use crisisd::gemini::GeminiClient;
use crisisd::server::{self, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        "Classroom crisis backend v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    info!("[M]  Model: {} via {}", config.model, config.api_base);

    let model = GeminiClient::new(&config);
    let state = AppState::new(Arc::new(model), config.model.clone());

    server::run(&config.bind_addr, state).await
}
