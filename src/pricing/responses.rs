//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::comparison::{ComparisonResult, CompetitorEstimate, Confidence};
use crate::pricing::composer::{PriceResult, Quote};
use crate::pricing::enterprise::{EnterpriseModel, EnterpriseRecommendation, VolumePrice};
use crate::pricing::BreakdownLine;

/// Response for a composed quote.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub catalog_version: &'static str,
    pub status: QuoteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PriceResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Priced,
    ContactSales,
}

impl QuoteResponse {
    pub fn from_quote(quote: Quote, catalog_version: &'static str) -> Self {
        let (status, result, reason) = match quote {
            Quote::Priced(result) => (QuoteStatus::Priced, Some(result), None),
            Quote::ContactSales { reason } => (QuoteStatus::ContactSales, None, Some(reason)),
        };
        QuoteResponse {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            catalog_version,
            status,
            result,
            reason,
        }
    }
}

/// Response for a competitor comparison batch.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResponse {
    pub generated_at: DateTime<Utc>,
    pub catalog_version: &'static str,
    /// Absent when the configuration itself requires a custom quote.
    #[serde(with = "rust_decimal::serde::str_option")]
    pub sundae_monthly: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub results: Vec<CompetitorComparisonDto>,
}

/// One competitor row, flattened for the wire: unpriceable competitors have
/// every price field null plus a note.
#[derive(Debug, Clone, Serialize)]
pub struct CompetitorComparisonDto {
    pub competitor_id: &'static str,
    pub competitor_name: &'static str,
    pub confidence: Confidence,
    pub notes: &'static str,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub monthly: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub first_year: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub ongoing: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub setup_fee: Option<Decimal>,
    pub breakdown: Vec<BreakdownLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unpriceable_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<SavingsDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavingsDto {
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub first_year: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ongoing: Decimal,
}

impl From<ComparisonResult> for CompetitorComparisonDto {
    fn from(result: ComparisonResult) -> Self {
        let (monthly, first_year, ongoing, setup_fee, breakdown, unpriceable_note) =
            match result.estimate {
                CompetitorEstimate::Priced(est) => (
                    Some(est.monthly),
                    Some(est.first_year),
                    Some(est.ongoing),
                    Some(est.setup_fee),
                    est.breakdown,
                    None,
                ),
                CompetitorEstimate::Unpriceable { note } => {
                    (None, None, None, None, Vec::new(), Some(note))
                }
            };
        CompetitorComparisonDto {
            competitor_id: result.competitor_id,
            competitor_name: result.competitor_name,
            confidence: result.confidence,
            notes: result.notes,
            monthly,
            first_year,
            ongoing,
            setup_fee,
            breakdown,
            unpriceable_note,
            savings: result.savings.map(|s| SavingsDto {
                monthly: s.monthly,
                first_year: s.first_year,
                ongoing: s.ongoing,
            }),
        }
    }
}

/// Response for the enterprise model comparison.
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseQuoteResponse {
    pub catalog_version: &'static str,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub volume_monthly: Option<Decimal>,
    /// True when the volume model resolves to the open custom tier.
    pub volume_custom: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub org_license_monthly: Decimal,
    pub recommended: EnterpriseModel,
}

impl EnterpriseQuoteResponse {
    pub fn from_recommendation(
        rec: EnterpriseRecommendation,
        catalog_version: &'static str,
    ) -> Self {
        let (volume_monthly, volume_custom) = match rec.volume {
            VolumePrice::Monthly(monthly) => (Some(monthly), false),
            VolumePrice::Custom => (None, true),
        };
        EnterpriseQuoteResponse {
            catalog_version,
            volume_monthly,
            volume_custom,
            org_license_monthly: rec.org_license,
            recommended: rec.recommended,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_contact_sales_quote_has_no_result() {
        let response = QuoteResponse::from_quote(
            Quote::ContactSales {
                reason: "requires a custom quote".to_string(),
            },
            "2025-07",
        );
        assert!(matches!(response.status, QuoteStatus::ContactSales));
        assert!(response.result.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "contact_sales");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_unpriceable_competitor_serializes_with_null_prices() {
        let dto = CompetitorComparisonDto::from(ComparisonResult {
            competitor_id: "reputation",
            competitor_name: "Reputation",
            confidence: Confidence::Low,
            notes: "quote-only",
            estimate: CompetitorEstimate::Unpriceable {
                note: "not publicly listed".to_string(),
            },
            savings: None,
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["monthly"], serde_json::Value::Null);
        assert_eq!(json["unpriceable_note"], "not publicly listed");
        assert!(json.get("savings").is_none());
    }

    #[test]
    fn test_enterprise_response_custom_volume() {
        let response = EnterpriseQuoteResponse::from_recommendation(
            EnterpriseRecommendation {
                volume: VolumePrice::Custom,
                org_license: dec!(5660),
                recommended: EnterpriseModel::OrgLicense,
            },
            "2025-07",
        );
        assert!(response.volume_custom);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["volume_monthly"], serde_json::Value::Null);
        assert_eq!(json["org_license_monthly"], "5660");
        assert_eq!(json["recommended"], "org_license");
    }
}
