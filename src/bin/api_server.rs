// API Server Binary Entry Point
//
// Purpose: Start the Axum API server (image identification + botanical chat)
// Usage: cargo run --features api --bin api_server

use lumon_botanist::{create_router, AppState, ServerConfig, TieBreak};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "lumon_botanist=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  MAX_UPLOAD_BYTES: {}", config.max_upload_bytes);
    tracing::info!("  DOWNSAMPLE_SIZE: {}", config.classifier.downsample_size);
    match config.classifier.tie_break {
        TieBreak::First => tracing::info!("  CLASSIFIER_SEED: unset (first candidate)"),
        TieBreak::Seeded(seed) => tracing::info!("  CLASSIFIER_SEED: {}", seed),
    }
    tracing::info!("  HISTORY_CAP: {}", config.responder.history_cap);
    tracing::info!("  SESSION_TTL_SECS: {}", config.sessions.ttl.as_secs());
    tracing::info!("  MAX_SESSIONS: {}", config.sessions.max_sessions);

    let state = AppState::new(&config);
    tracing::info!("Application state initialized successfully");

    // Create router with all endpoints and middleware
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
