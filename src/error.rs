//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::pricing::responses::PricingErrorResponse;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            // Catalog tables failing to reconcile is a server-side data bug,
            // not a bad request.
            AppError::Pricing(PricingError::CatalogIntegrity { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Pricing(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::Pricing(err) => match err {
                PricingError::UnknownLayer { .. } => "unknown_layer",
                PricingError::UnknownTier { .. } => "unknown_tier",
                PricingError::UnknownModule { .. } => "unknown_module",
                PricingError::UnknownWatchtowerId { .. } => "unknown_watchtower_id",
                PricingError::UnknownClientType { .. } => "unknown_client_type",
                PricingError::InvalidLocations { .. } => "invalid_locations",
                PricingError::NotEnterpriseScale { .. } => "not_enterprise_scale",
                PricingError::CatalogIntegrity { .. } => "catalog_integrity",
            },
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}: {}", self.error_type(), self);
        } else {
            tracing::debug!("rejected request: {}", self);
        }

        let body = PricingErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
