//! Sundae pricing configurator service.
//!
//! A pure pricing engine (`pricing`, `comparison`) over static reference
//! data (`catalog`), exposed to the host UI as a small HTTP/JSON API. The
//! host assembles a configuration per user interaction and recomputes the
//! price on every change; all state lives on the caller's side.

pub mod cache;
pub mod catalog;
pub mod comparison;
pub mod error;
pub mod pricing;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use cache::{CacheStats, QuoteCache};
use catalog::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cache: QuoteCache,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            catalog: Arc::new(Catalog::current()),
            cache: QuoteCache::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/pricing", pricing::router())
        .route("/api/cache/stats", get(cache_stats))
        .route("/api/cache/invalidate", post(cache_invalidate))
        .route("/health", get(health))
        .with_state(state)
}

/// Cache monitoring endpoint
async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Flush memoized quotes (used when a pricing epoch rolls over)
async fn cache_invalidate(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.cache.invalidate_all();
    Json(serde_json::json!({ "status": "invalidated" }))
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "catalog_version": state.catalog.version(),
    }))
}
