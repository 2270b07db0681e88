use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use careerpath_api::chat::ChatClient;
use careerpath_api::config::Config;
use careerpath_api::generation::generator::CatalogRecommendationGenerator;
use careerpath_api::notify::TracingNotifier;
use careerpath_api::routes::build_router;
use careerpath_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog generator by default; swap for a model-backed one here.
    let generator = Arc::new(CatalogRecommendationGenerator::new(config.generation_delay));
    info!(
        "Recommendation generator initialized (simulated latency: {}ms)",
        config.generation_delay.as_millis()
    );

    let chat = Arc::new(ChatClient::new(
        config.chat_endpoint_url.clone(),
        config.chat_timeout,
    )?);
    info!("Chat relay initialized (endpoint: {})", chat.endpoint());

    let state = AppState::new(config.clone(), generator, Arc::new(TracingNotifier), chat);

    // Background sweep of expired assessments and chat threads
    let sweep_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_state.config.session_sweep_interval);
        loop {
            interval.tick().await;
            sweep_state.sweep_expired_sessions().await;
        }
    });
    info!(
        "Session sweeper started (ttl: {}s)",
        config.session_ttl.as_secs()
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
