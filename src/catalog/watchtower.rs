//! Watchtower competitive-intelligence add-on definitions.
//!
//! Watchtower is sold as three individual modules or a discounted bundle.
//! Below [`WATCHTOWER_ENTERPRISE_THRESHOLD`] locations, pricing is
//! base-plus-overage per module; at or above it, a flat rate table keyed on
//! location ranges applies instead.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::pricing::PricingError;

/// Location count at which watchtower switches to the enterprise rate table.
pub const WATCHTOWER_ENTERPRISE_THRESHOLD: u32 = 30;

/// A selectable watchtower id on the wire: one of the three modules, or the
/// bundle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchtowerId {
    Competitive,
    Events,
    Trends,
    Bundle,
}

impl WatchtowerId {
    /// Parse a watchtower id from its wire representation (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, PricingError> {
        match s.to_lowercase().as_str() {
            "competitive" => Ok(WatchtowerId::Competitive),
            "events" => Ok(WatchtowerId::Events),
            "trends" => Ok(WatchtowerId::Trends),
            "bundle" => Ok(WatchtowerId::Bundle),
            _ => Err(PricingError::UnknownWatchtowerId { id: s.to_string() }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchtowerId::Competitive => "competitive",
            WatchtowerId::Events => "events",
            WatchtowerId::Trends => "trends",
            WatchtowerId::Bundle => "bundle",
        }
    }

    /// The individual module this id names, or `None` for the bundle.
    pub fn as_module(&self) -> Option<WatchtowerModule> {
        match self {
            WatchtowerId::Competitive => Some(WatchtowerModule::Competitive),
            WatchtowerId::Events => Some(WatchtowerModule::Events),
            WatchtowerId::Trends => Some(WatchtowerModule::Trends),
            WatchtowerId::Bundle => None,
        }
    }
}

/// One of the three individually-priced watchtower modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchtowerModule {
    Competitive,
    Events,
    Trends,
}

impl WatchtowerModule {
    pub const ALL: [WatchtowerModule; 3] = [
        WatchtowerModule::Competitive,
        WatchtowerModule::Events,
        WatchtowerModule::Trends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchtowerModule::Competitive => "competitive",
            WatchtowerModule::Events => "events",
            WatchtowerModule::Trends => "trends",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WatchtowerModule::Competitive => "Watchtower Competitive",
            WatchtowerModule::Events => "Watchtower Events",
            WatchtowerModule::Trends => "Watchtower Trends",
        }
    }
}

/// Pricing for one individual watchtower module. The base price covers the
/// first location only.
#[derive(Debug, Clone, Serialize)]
pub struct WatchtowerModuleDefinition {
    pub module: WatchtowerModule,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_location_price: Decimal,
    pub included_locations: u32,
}

impl WatchtowerModuleDefinition {
    pub fn get(module: WatchtowerModule) -> WatchtowerModuleDefinition {
        let (base_price, per_location_price) = match module {
            WatchtowerModule::Competitive => (dec!(329), dec!(39)),
            WatchtowerModule::Events => (dec!(259), dec!(29)),
            WatchtowerModule::Trends => (dec!(259), dec!(29)),
        };
        WatchtowerModuleDefinition {
            module,
            base_price,
            per_location_price,
            included_locations: 1,
        }
    }
}

/// Pricing for the watchtower bundle.
///
/// `base_savings` and `savings_percent` are derived from the individual
/// module prices and must reconcile with them: the bundle's first-location
/// discount is `Σ individual base prices − base_price`.
#[derive(Debug, Clone, Serialize)]
pub struct WatchtowerBundleDefinition {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_location_price: Decimal,
    pub includes: [WatchtowerModule; 3],
    #[serde(with = "rust_decimal::serde::str")]
    pub base_savings: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub savings_percent: Decimal,
}

impl WatchtowerBundleDefinition {
    pub fn get() -> WatchtowerBundleDefinition {
        WatchtowerBundleDefinition {
            base_price: dec!(720),
            per_location_price: dec!(82),
            includes: WatchtowerModule::ALL,
            base_savings: dec!(127),
            savings_percent: dec!(15),
        }
    }
}

/// Flat watchtower pricing for one enterprise location range.
///
/// Enterprise prices are per range, not per location: a 45-location org and
/// a 31-location org in the 30–49 band pay the same figure.
#[derive(Debug, Clone, Serialize)]
pub struct WatchtowerEnterpriseTier {
    pub min_locations: u32,
    pub max_locations: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub competitive: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub events: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub trends: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bundle: Decimal,
}

impl WatchtowerEnterpriseTier {
    /// The ordered enterprise rate table. Counts above the last tier's upper
    /// bound have no listed price and require a custom quote.
    pub fn table() -> Vec<WatchtowerEnterpriseTier> {
        vec![
            WatchtowerEnterpriseTier {
                min_locations: 30,
                max_locations: 49,
                competitive: dec!(950),
                events: dec!(850),
                trends: dec!(850),
                bundle: dec!(2400),
            },
            WatchtowerEnterpriseTier {
                min_locations: 50,
                max_locations: 99,
                competitive: dec!(1500),
                events: dec!(1400),
                trends: dec!(1400),
                bundle: dec!(3900),
            },
            WatchtowerEnterpriseTier {
                min_locations: 100,
                max_locations: 250,
                competitive: dec!(2600),
                events: dec!(2400),
                trends: dec!(2400),
                bundle: dec!(6500),
            },
        ]
    }

    /// Find the tier covering `locations`, if any.
    pub fn for_locations(locations: u32) -> Option<WatchtowerEnterpriseTier> {
        Self::table()
            .into_iter()
            .find(|t| locations >= t.min_locations && locations <= t.max_locations)
    }

    pub fn module_price(&self, module: WatchtowerModule) -> Decimal {
        match module {
            WatchtowerModule::Competitive => self.competitive,
            WatchtowerModule::Events => self.events,
            WatchtowerModule::Trends => self.trends,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchtower_parse() {
        assert_eq!(
            WatchtowerId::parse("bundle").unwrap(),
            WatchtowerId::Bundle
        );
        assert!(matches!(
            WatchtowerId::parse("radar"),
            Err(PricingError::UnknownWatchtowerId { .. })
        ));
    }

    #[test]
    fn test_bundle_savings_reconcile_with_module_prices() {
        let bundle = WatchtowerBundleDefinition::get();
        let individual_base: Decimal = WatchtowerModule::ALL
            .iter()
            .map(|m| WatchtowerModuleDefinition::get(*m).base_price)
            .sum();
        assert_eq!(individual_base - bundle.base_price, bundle.base_savings);

        // The bundle must be cheaper per additional location too, or the
        // substitution tie-break could raise a customer's price.
        let individual_per_loc: Decimal = WatchtowerModule::ALL
            .iter()
            .map(|m| WatchtowerModuleDefinition::get(*m).per_location_price)
            .sum();
        assert!(bundle.per_location_price < individual_per_loc);
    }

    #[test]
    fn test_enterprise_table_lookup() {
        assert!(WatchtowerEnterpriseTier::for_locations(29).is_none());
        assert_eq!(
            WatchtowerEnterpriseTier::for_locations(30).unwrap().bundle,
            dec!(2400)
        );
        assert_eq!(
            WatchtowerEnterpriseTier::for_locations(99).unwrap().bundle,
            dec!(3900)
        );
        assert_eq!(
            WatchtowerEnterpriseTier::for_locations(250).unwrap().bundle,
            dec!(6500)
        );
        // Above the table: custom quote territory.
        assert!(WatchtowerEnterpriseTier::for_locations(251).is_none());
    }
}
