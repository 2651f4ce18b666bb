//! Pricing route handlers

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;

use crate::cache::QuoteCache;
use crate::comparison;
use crate::error::Result;
use crate::pricing::composer::{calculate_full_price, Quote};
use crate::pricing::enterprise::recommend_enterprise_model;
use crate::pricing::requests::{ConfigurationRequest, EnterpriseQuoteRequest};
use crate::pricing::responses::{
    ComparisonResponse, CompetitorComparisonDto, EnterpriseQuoteResponse, QuoteResponse,
};
use crate::AppState;

/// Pricing API router, mounted under `/api/pricing`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/comparison", post(comparison_handler))
        .route("/enterprise", post(enterprise))
        .route("/catalog", get(catalog))
}

/// Compose a full quote for a configuration.
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<ConfigurationRequest>,
) -> Result<Json<QuoteResponse>> {
    let config = request.into_configuration()?;

    // Try cache first
    let key = QuoteCache::config_key(&config);
    if let Some(cached) = state.cache.quotes.get(&key).await {
        tracing::debug!("Cache HIT for quote: {}", key);
        return Ok(Json((*cached).clone()));
    }
    tracing::debug!("Cache MISS for quote: {}", key);

    let quote = calculate_full_price(&state.catalog, &config)?;
    let response = QuoteResponse::from_quote(quote, state.catalog.version());
    state
        .cache
        .quotes
        .insert(key, Arc::new(response.clone()))
        .await;

    Ok(Json(response))
}

/// Estimate competitor costs for a configuration and rank the savings.
pub async fn comparison_handler(
    State(state): State<AppState>,
    Json(request): Json<ConfigurationRequest>,
) -> Result<Json<ComparisonResponse>> {
    let config = request.into_configuration()?;

    let key = QuoteCache::config_key(&config);
    if let Some(cached) = state.cache.comparisons.get(&key).await {
        tracing::debug!("Cache HIT for comparison: {}", key);
        return Ok(Json((*cached).clone()));
    }

    let response = match calculate_full_price(&state.catalog, &config)? {
        Quote::Priced(result) => {
            let results = comparison::compare_all(
                config.locations,
                &config.modules,
                !config.watchtower.is_empty(),
                result.total,
            );
            ComparisonResponse {
                generated_at: Utc::now(),
                catalog_version: state.catalog.version(),
                sundae_monthly: Some(result.total),
                note: None,
                results: results
                    .into_iter()
                    .map(CompetitorComparisonDto::from)
                    .collect(),
            }
        }
        // A configuration that needs a custom quote has no total to compare
        // against; this is a terminal state, not an error.
        Quote::ContactSales { reason } => ComparisonResponse {
            generated_at: Utc::now(),
            catalog_version: state.catalog.version(),
            sundae_monthly: None,
            note: Some(reason),
            results: Vec::new(),
        },
    };

    state
        .cache
        .comparisons
        .insert(key, Arc::new(response.clone()))
        .await;

    Ok(Json(response))
}

/// Compare both enterprise pricing models for a footprint.
pub async fn enterprise(
    State(state): State<AppState>,
    Json(request): Json<EnterpriseQuoteRequest>,
) -> Result<Json<EnterpriseQuoteResponse>> {
    let rec = recommend_enterprise_model(&state.catalog, request.locations, request.brand_count)?;
    Ok(Json(EnterpriseQuoteResponse::from_recommendation(
        rec,
        state.catalog.version(),
    )))
}

/// Read-only catalog snapshot for host-UI rendering.
pub async fn catalog(State(state): State<AppState>) -> Json<crate::catalog::CatalogSnapshot> {
    Json(state.catalog.snapshot())
}
