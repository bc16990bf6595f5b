//! SR-GEO-PoC Tracker Backend
//!
//! Serves synthetic geophysical parameter data, weighted earthquake
//! predictions and canned assistant answers to the tracker dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SR-GEO-PoC TRACKER                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌────────────┐  ┌─────────────────────────┐ │
//! │  │  API      │  │ Prediction │  │  Push Hub               │ │
//! │  │  Gateway  │──│ Aggregator │──│  (ticker + broadcast)   │ │
//! │  │  (Axum)   │  │            │  │                         │ │
//! │  └─────┬─────┘  └─────┬──────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │                ┌─────────────┐                              │
//! │                │ Mock Data   │                              │
//! │                └─────────────┘                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod prediction;
mod mock;
mod assistant;
mod push;
mod handlers;
mod error;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;
use std::path::Path;

pub use error::{AppError, AppResult};

use prediction::Weights;
use push::PushHub;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize logging first so configuration warnings are visible
    init_tracing(config::Config::log_json_from_env().unwrap_or(false));
    let config = config::Config::from_env();

    tracing::info!("SR-GEO-PoC Tracker starting...");
    tracing::info!(
        environment = %config.environment,
        weight_profile = ?config.weight_profile,
        "Configuration loaded"
    );

    let weights = config.weight_profile.weights();

    // Start live updates before accepting connections
    let hub = PushHub::new(config.push_interval(), weights);
    hub.start().await;

    let state = AppState {
        config: config.clone(),
        weights,
        hub: hub.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(hub.clone()))
        .await
        .context("Server error")?;

    hub.stop().await;
    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(log_json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "srgeo_tracker=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolves on Ctrl+C; stops the push hub so live sockets close and the
/// server can drain.
async fn shutdown_signal(hub: PushHub) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown requested");
    hub.stop().await;
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub weights: Weights,
    pub hub: PushHub,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Parameter data and prediction routes
    let data_routes = Router::new()
        .route("/api/data/schumann", get(handlers::data::schumann))
        .route("/api/data/tec", get(handlers::data::tec))
        .route("/api/data/elf", get(handlers::data::elf))
        .route("/api/data/gravity", get(handlers::data::gravity))
        .route("/api/data/historical", get(handlers::data::historical))
        .route(
            "/api/data/prediction",
            get(handlers::prediction::current).post(handlers::prediction::calculate),
        )
        .route("/api/data/prediction/readings", post(handlers::prediction::from_readings))
        .route("/api/data/risk-zones", get(handlers::map::risk_zones))
        .route("/api/data/recent-alerts", get(handlers::map::recent_alerts));

    // Paths used by the first dashboard release
    let legacy_routes = Router::new()
        .route("/api/prediction", get(handlers::prediction::current))
        .route("/api/risk-zones", get(handlers::map::risk_zones))
        .route("/api/recent-alerts", get(handlers::map::recent_alerts));

    let assistant_routes = Router::new()
        .route("/api/assistant/ask", post(handlers::assistant::ask))
        .route("/api/historical-events", get(handlers::events::list));

    let router = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/ws", get(handlers::ws::upgrade))
        .merge(data_routes)
        .merge(legacy_routes)
        .merge(assistant_routes);

    // Serve the built front end in production, with SPA fallback
    let router = if state.config.is_production() {
        let static_dir = Path::new(&state.config.static_dir);
        let index = static_dir.join("index.html");
        tracing::info!("Serving static assets from {}", static_dir.display());
        router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
    } else {
        router.fallback(handlers::not_found)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
