//! Service entry point.

use anyhow::Context;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use sundae_pricing::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sundae_pricing=info,tower_http=info")),
        )
        .init();

    let state = AppState::new();
    tracing::info!(
        "Starting sundae-pricing with catalog epoch {}",
        state.catalog.version()
    );

    let router = app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new()),
    );

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("server exited")?;

    Ok(())
}
