//! QuoteSync Server - the remote endpoint clients sync against.
//!
//! Serves the canonical quote list over HTTP and merges pushed snapshots
//! into it using the quotesync-engine reconciliation logic. State is held
//! in memory; this is the stand-in for a real backend, not one itself.

mod config;
mod error;
mod routes;

use crate::config::Config;
use axum::Router;
use quotesync_engine::{default_quotes, Reconciler, Snapshot};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<RwLock<Snapshot>>,
    pub reconciler: Reconciler,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotesync_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting QuoteSync Server on {}:{}", config.host, config.port);

    // Build application state, seeded with the default snapshot
    let state = AppState {
        quotes: Arc::new(RwLock::new(default_quotes())),
        reconciler: Reconciler::default(),
    };

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
