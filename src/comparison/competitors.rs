//! Competitor registry.
//!
//! Public-list pricing for the reputation platforms Sundae is most often
//! compared against. Estimates are directional: each entry carries a
//! confidence grade, and competitors without determinable public pricing are
//! modeled as quote-only rather than guessed at.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// How much weight to put on an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// How a competitor's public pricing is structured.
#[derive(Debug, Clone)]
pub enum CompetitorPricing {
    /// Per-location subscription, optionally with a per-location setup fee,
    /// a per-selected-module add-on rate, and a flat intelligence add-on
    /// priced only when the configuration includes watchtower.
    PerLocation {
        monthly_per_location: Decimal,
        setup_per_location: Decimal,
        addon_monthly_per_module: Decimal,
        intelligence_monthly: Decimal,
    },
    /// Flat platform fee plus a per-location rate.
    PlatformPlusLocation {
        platform_monthly: Decimal,
        monthly_per_location: Decimal,
        setup_fee: Decimal,
    },
    /// No publicly determinable pricing.
    QuoteOnly,
}

/// One registered competitor.
#[derive(Debug, Clone)]
pub struct Competitor {
    pub id: &'static str,
    pub name: &'static str,
    /// Unverified entries are research drafts and never surface in output.
    pub verified: bool,
    /// Hidden entries are suppressed for commercial reasons.
    pub hidden: bool,
    pub pricing: CompetitorPricing,
    pub notes: &'static str,
    pub confidence: Confidence,
}

impl Competitor {
    /// Every competitor the engine knows about, including ones the
    /// aggregator will filter out.
    pub fn registry() -> Vec<Competitor> {
        vec![
            Competitor::birdeye(),
            Competitor::podium(),
            Competitor::ovation(),
            Competitor::momos(),
            Competitor::reputation(),
            Competitor::localclarity(),
            Competitor::chatmeter(),
        ]
    }

    pub fn birdeye() -> Competitor {
        Competitor {
            id: "birdeye",
            name: "Birdeye",
            verified: true,
            hidden: false,
            pricing: CompetitorPricing::PerLocation {
                monthly_per_location: dec!(299),
                setup_per_location: dec!(299),
                addon_monthly_per_module: dec!(50),
                intelligence_monthly: dec!(400),
            },
            notes: "List pricing for the Professional plan; annual contract required",
            confidence: Confidence::Medium,
        }
    }

    pub fn podium() -> Competitor {
        Competitor {
            id: "podium",
            name: "Podium",
            verified: true,
            hidden: false,
            pricing: CompetitorPricing::PerLocation {
                monthly_per_location: dec!(399),
                setup_per_location: Decimal::ZERO,
                addon_monthly_per_module: dec!(75),
                intelligence_monthly: Decimal::ZERO,
            },
            notes: "Core plan list price; no competitive intelligence product",
            confidence: Confidence::Medium,
        }
    }

    pub fn ovation() -> Competitor {
        Competitor {
            id: "ovation",
            name: "Ovation",
            verified: true,
            hidden: false,
            pricing: CompetitorPricing::PerLocation {
                monthly_per_location: dec!(149),
                setup_per_location: Decimal::ZERO,
                addon_monthly_per_module: dec!(29),
                intelligence_monthly: Decimal::ZERO,
            },
            notes: "Published per-location pricing; guest feedback focus",
            confidence: Confidence::High,
        }
    }

    pub fn momos() -> Competitor {
        Competitor {
            id: "momos",
            name: "Momos",
            verified: true,
            hidden: false,
            pricing: CompetitorPricing::PlatformPlusLocation {
                platform_monthly: dec!(499),
                monthly_per_location: dec!(99),
                setup_fee: dec!(1000),
            },
            notes: "Platform fee estimated from published case studies",
            confidence: Confidence::Low,
        }
    }

    pub fn reputation() -> Competitor {
        Competitor {
            id: "reputation",
            name: "Reputation",
            verified: true,
            hidden: false,
            pricing: CompetitorPricing::QuoteOnly,
            notes: "Enterprise-only sales motion; pricing not publicly listed",
            confidence: Confidence::Low,
        }
    }

    pub fn localclarity() -> Competitor {
        Competitor {
            id: "localclarity",
            name: "LocalClarity",
            verified: false,
            hidden: false,
            pricing: CompetitorPricing::PerLocation {
                monthly_per_location: dec!(129),
                setup_per_location: Decimal::ZERO,
                addon_monthly_per_module: Decimal::ZERO,
                intelligence_monthly: Decimal::ZERO,
            },
            notes: "Draft entry pending pricing verification",
            confidence: Confidence::Low,
        }
    }

    pub fn chatmeter() -> Competitor {
        Competitor {
            id: "chatmeter",
            name: "Chatmeter",
            verified: true,
            hidden: true,
            pricing: CompetitorPricing::QuoteOnly,
            notes: "Suppressed from comparisons",
            confidence: Confidence::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let registry = Competitor::registry();
        assert!(registry.iter().any(|c| c.id == "birdeye"));
        assert!(registry.iter().any(|c| c.id == "reputation"));

        // The filtered-out entries are still registered; the aggregator
        // decides what surfaces.
        assert!(registry.iter().any(|c| !c.verified));
        assert!(registry.iter().any(|c| c.hidden));
    }

    #[test]
    fn test_quote_only_competitors_have_no_rate() {
        let reputation = Competitor::reputation();
        assert!(matches!(reputation.pricing, CompetitorPricing::QuoteOnly));
    }
}
