//! ChatMind HTTP Server
//!
//! Axum-based server for the landing page: JSON endpoints for testimonials,
//! pricing plans and the contact form, plus the compiled WASM frontend as
//! static files.

mod config;
mod handlers;
mod router;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatmind_core::{LandingService, MemoryStore, MockMultimodalModel, MultimodalModel};

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Store and image model live for the whole process
    let store = Arc::new(MemoryStore::new());
    let model: Arc<dyn MultimodalModel> = Arc::new(MockMultimodalModel::new());
    tracing::info!("Image model: {}", model.name());

    let service = LandingService::new(store, model);

    if config.seed_on_startup {
        if let Err(e) = service.seed().await {
            tracing::error!("Seeding failed: {}", e);
        }
    } else {
        tracing::info!("Seeding disabled (SEED_ON_STARTUP)");
    }

    let app = build_router(AppState::new(service), &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("ChatMind server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health             - Health check");
    tracing::info!("  GET  /api/testimonials   - Testimonials, newest first");
    tracing::info!("  GET  /api/pricing-plans  - Pricing plans, cheapest first");
    tracing::info!("  POST /api/contact        - Submit contact form");
    tracing::info!("  GET  /*                  - Static files from {}", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
