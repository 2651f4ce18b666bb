//! Base product tiers for the Report and Core layers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::pricing::PricingError;

/// Top-level product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Report,
    Core,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Report, Layer::Core];

    /// Parse a layer from its wire representation (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, PricingError> {
        match s.to_lowercase().as_str() {
            "report" => Ok(Layer::Report),
            "core" => Ok(Layer::Core),
            _ => Err(PricingError::UnknownLayer { id: s.to_string() }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Report => "report",
            Layer::Core => "core",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Layer::Report => "Sundae Report",
            Layer::Core => "Sundae Core",
        }
    }
}

/// Priced product level within a layer.
///
/// The same three level names exist in both layers; pricing differs per
/// (layer, tier) pair; see [`TierDefinition::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierId {
    Lite,
    Plus,
    Pro,
}

impl TierId {
    pub const ALL: [TierId; 3] = [TierId::Lite, TierId::Plus, TierId::Pro];

    /// Parse a tier id from its wire representation (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, PricingError> {
        match s.to_lowercase().as_str() {
            "lite" => Ok(TierId::Lite),
            "plus" => Ok(TierId::Plus),
            "pro" => Ok(TierId::Pro),
            _ => Err(PricingError::UnknownTier { id: s.to_string() }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TierId::Lite => "lite",
            TierId::Plus => "plus",
            TierId::Pro => "pro",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TierId::Lite => "Lite",
            TierId::Plus => "Plus",
            TierId::Pro => "Pro",
        }
    }
}

/// Monthly AI credit allowance attached to a tier.
///
/// Credits scale with location count the same way the tier price does:
/// `base` covers the first location, `per_location` each one after it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AiCredits {
    pub base: u32,
    pub per_location: u32,
}

/// Pricing and entitlements for one (layer, tier) pair.
///
/// Location #1 is always covered by `base_price`; every location beyond the
/// first bills at `additional_location_price`.
#[derive(Debug, Clone, Serialize)]
pub struct TierDefinition {
    pub layer: Layer,
    pub tier: TierId,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub additional_location_price: Decimal,
    pub ai_credits: AiCredits,
    pub ai_seats: u32,
    pub features: &'static [&'static str],
}

impl TierDefinition {
    /// Definition table for all six (layer, tier) pairs.
    ///
    /// This match is total: with typed ids there is no unknown-tier path
    /// here; unrecognized wire ids are rejected when parsed.
    pub fn get(layer: Layer, tier: TierId) -> TierDefinition {
        match (layer, tier) {
            (Layer::Report, TierId::Lite) => TierDefinition {
                layer,
                tier,
                base_price: dec!(29),
                additional_location_price: dec!(19),
                ai_credits: AiCredits { base: 50, per_location: 10 },
                ai_seats: 1,
                features: &["review_digest", "monthly_report"],
            },
            (Layer::Report, TierId::Plus) => TierDefinition {
                layer,
                tier,
                base_price: dec!(49),
                additional_location_price: dec!(29),
                ai_credits: AiCredits { base: 100, per_location: 25 },
                ai_seats: 1,
                features: &["review_digest", "weekly_report", "sentiment_trends"],
            },
            (Layer::Report, TierId::Pro) => TierDefinition {
                layer,
                tier,
                base_price: dec!(79),
                additional_location_price: dec!(45),
                ai_credits: AiCredits { base: 250, per_location: 50 },
                ai_seats: 2,
                features: &[
                    "review_digest",
                    "weekly_report",
                    "sentiment_trends",
                    "location_benchmarks",
                ],
            },
            (Layer::Core, TierId::Lite) => TierDefinition {
                layer,
                tier,
                base_price: dec!(99),
                additional_location_price: dec!(59),
                ai_credits: AiCredits { base: 500, per_location: 100 },
                ai_seats: 3,
                features: &["review_inbox", "ai_replies", "guest_feedback"],
            },
            (Layer::Core, TierId::Plus) => TierDefinition {
                layer,
                tier,
                base_price: dec!(149),
                additional_location_price: dec!(69),
                ai_credits: AiCredits { base: 1000, per_location: 150 },
                ai_seats: 5,
                features: &[
                    "review_inbox",
                    "ai_replies",
                    "guest_feedback",
                    "campaign_automations",
                ],
            },
            (Layer::Core, TierId::Pro) => TierDefinition {
                layer,
                tier,
                base_price: dec!(199),
                additional_location_price: dec!(79),
                ai_credits: AiCredits { base: 2000, per_location: 250 },
                ai_seats: 10,
                features: &[
                    "review_inbox",
                    "ai_replies",
                    "guest_feedback",
                    "campaign_automations",
                    "multi_location_dashboard",
                    "api_access",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_parse() {
        assert_eq!(Layer::parse("report").unwrap(), Layer::Report);
        assert_eq!(Layer::parse("Core").unwrap(), Layer::Core);
        assert!(matches!(
            Layer::parse("premium"),
            Err(PricingError::UnknownLayer { .. })
        ));
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!(TierId::parse("plus").unwrap(), TierId::Plus);
        assert_eq!(TierId::parse("PRO").unwrap(), TierId::Pro);
        assert!(matches!(
            TierId::parse("ultimate"),
            Err(PricingError::UnknownTier { .. })
        ));
    }

    #[test]
    fn test_definition_table_is_total() {
        for layer in Layer::ALL {
            for tier in TierId::ALL {
                let def = TierDefinition::get(layer, tier);
                assert_eq!(def.layer, layer);
                assert_eq!(def.tier, tier);
                assert!(def.base_price > Decimal::ZERO);
                assert!(!def.features.is_empty());
            }
        }
    }

    #[test]
    fn test_core_pro_dominates_core_lite() {
        let lite = TierDefinition::get(Layer::Core, TierId::Lite);
        let pro = TierDefinition::get(Layer::Core, TierId::Pro);
        // Both the base and the per-location increment are strictly higher,
        // so pro costs more than lite at every location count.
        assert!(pro.base_price > lite.base_price);
        assert!(pro.additional_location_price > lite.additional_location_price);
    }
}
