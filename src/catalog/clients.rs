//! Client segmentation rules and the early-adopter program.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::pricing::PricingError;

/// Inclusive location range; `max: None` means open-ended.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocationRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl LocationRange {
    pub fn contains(&self, locations: u32) -> bool {
        locations >= self.min && self.max.map_or(true, |max| locations <= max)
    }
}

/// Client segmentation driving discount eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    Independent,
    Growth,
    MultiSite,
    Franchise,
    Enterprise,
}

impl ClientType {
    pub const ALL: [ClientType; 5] = [
        ClientType::Independent,
        ClientType::Growth,
        ClientType::MultiSite,
        ClientType::Franchise,
        ClientType::Enterprise,
    ];

    /// Parse a client type from its wire representation (case-insensitive,
    /// hyphen and underscore both accepted).
    pub fn parse(s: &str) -> Result<Self, PricingError> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "independent" => Ok(ClientType::Independent),
            "growth" => Ok(ClientType::Growth),
            "multisite" => Ok(ClientType::MultiSite),
            "franchise" => Ok(ClientType::Franchise),
            "enterprise" => Ok(ClientType::Enterprise),
            _ => Err(PricingError::UnknownClientType { id: s.to_string() }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Independent => "independent",
            ClientType::Growth => "growth",
            ClientType::MultiSite => "multi_site",
            ClientType::Franchise => "franchise",
            ClientType::Enterprise => "enterprise",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ClientType::Independent => "Independent",
            ClientType::Growth => "Growth",
            ClientType::MultiSite => "Multi-site",
            ClientType::Franchise => "Franchise",
            ClientType::Enterprise => "Enterprise",
        }
    }

    /// The client type whose location range covers `locations`.
    ///
    /// Mirrors the catalog rules for host-UI defaulting; franchise is never
    /// suggested from a count alone since it depends on brand structure.
    pub fn suggested_for(locations: u32) -> ClientType {
        if locations >= 30 {
            ClientType::Enterprise
        } else if locations >= 10 {
            ClientType::MultiSite
        } else if locations >= 3 {
            ClientType::Growth
        } else {
            ClientType::Independent
        }
    }
}

/// Pricing model a client type resolves to.
///
/// Enterprise clients are priced by the volume/org-license models and never
/// receive the client-type percentage discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    Standard,
    Growth,
    Enterprise,
}

/// Discount rule for one client type.
#[derive(Debug, Clone, Serialize)]
pub struct ClientTypeRule {
    pub client_type: ClientType,
    pub locations: LocationRange,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_percent: Decimal,
    pub pricing_model: PricingModel,
}

impl ClientTypeRule {
    pub fn get(client_type: ClientType) -> ClientTypeRule {
        match client_type {
            ClientType::Independent => ClientTypeRule {
                client_type,
                locations: LocationRange { min: 1, max: Some(2) },
                discount_percent: dec!(0),
                pricing_model: PricingModel::Standard,
            },
            ClientType::Growth => ClientTypeRule {
                client_type,
                locations: LocationRange { min: 3, max: Some(9) },
                discount_percent: dec!(10),
                pricing_model: PricingModel::Growth,
            },
            ClientType::MultiSite => ClientTypeRule {
                client_type,
                locations: LocationRange { min: 10, max: Some(29) },
                discount_percent: dec!(15),
                pricing_model: PricingModel::Growth,
            },
            ClientType::Franchise => ClientTypeRule {
                client_type,
                locations: LocationRange { min: 10, max: None },
                discount_percent: dec!(12),
                pricing_model: PricingModel::Growth,
            },
            // The nominal 20% here is never applied: enterprise clients go
            // through the volume/org-license models instead.
            ClientType::Enterprise => ClientTypeRule {
                client_type,
                locations: LocationRange { min: 30, max: None },
                discount_percent: dec!(20),
                pricing_model: PricingModel::Enterprise,
            },
        }
    }
}

/// Terms of the time-limited early-adopter program.
#[derive(Debug, Clone, Serialize)]
pub struct EarlyAdopterTerms {
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_percent: Decimal,
    pub bonus_credits: u32,
    pub price_lock_months: u32,
    pub extended_trial_days: u32,
}

impl EarlyAdopterTerms {
    pub fn get() -> EarlyAdopterTerms {
        EarlyAdopterTerms {
            discount_percent: dec!(20),
            bonus_credits: 500,
            price_lock_months: 12,
            extended_trial_days: 30,
        }
    }
}
