//! Full price composition.
//!
//! Aggregates the tier, module and watchtower calculators into one
//! [`PriceResult`], applies the discount stack, and derives the per-location
//! and annual figures. Output is fully determined by input; the API layer
//! memoizes it on the configuration fingerprint.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::catalog::{Catalog, ModuleId};
use crate::pricing::config::Configuration;
use crate::pricing::discounts::{apply_discounts, DiscountLine};
use crate::pricing::modules::calculate_module_price;
use crate::pricing::tier::calculate_tier_price;
use crate::pricing::watchtower::{calculate_watchtower_price, WatchtowerQuote};
use crate::pricing::{round_money, BreakdownLine, PricingError};

/// A complete priced configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    pub discounts_applied: Vec<DiscountLine>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_location: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub annual_total: Decimal,
    pub ai_credits_total: u32,
    pub ai_seats_total: u32,
    pub breakdown: Vec<BreakdownLine>,
}

/// Outcome of composing a quote. Contact-sales is a valid terminal state;
/// it reaches the host as its own status, never as a zero-priced result.
#[derive(Debug, Clone, PartialEq)]
pub enum Quote {
    Priced(PriceResult),
    ContactSales { reason: String },
}

/// Compose the full monthly price for a configuration.
pub fn calculate_full_price(
    catalog: &Catalog,
    config: &Configuration,
) -> Result<Quote, PricingError> {
    config.validate()?;

    let mut breakdown = Vec::new();
    let mut subtotal = Decimal::ZERO;

    // Base tier
    let tier = calculate_tier_price(catalog, config.layer, config.tier, config.locations);
    breakdown.push(BreakdownLine::new(
        format!(
            "{} {}",
            config.layer.display_name(),
            config.tier.display_name()
        ),
        tier.price,
    ));
    subtotal += tier.price;

    // Add-on modules, in catalog order regardless of click order
    for module in ModuleId::ALL {
        if !config.modules.contains(&module) {
            continue;
        }
        let def = catalog.module(module);
        let price = calculate_module_price(catalog, module, config.locations);
        let overage = config.locations.saturating_sub(def.included_locations);
        let line = if overage > 0 {
            BreakdownLine::with_note(
                def.id.display_name(),
                price,
                format!(
                    "{} locations beyond the {} included in the org license",
                    overage, def.included_locations
                ),
            )
        } else {
            BreakdownLine::new(def.id.display_name(), price)
        };
        breakdown.push(line);
        subtotal += price;
    }

    // Watchtower intelligence add-on
    let watchtower = calculate_watchtower_price(catalog, &config.watchtower, config.locations)?;
    match watchtower {
        WatchtowerQuote::ContactSales => {
            return Ok(Quote::ContactSales {
                reason: format!(
                    "Watchtower pricing for {} locations requires a custom quote",
                    config.locations
                ),
            });
        }
        WatchtowerQuote::Priced(pricing) => {
            breakdown.extend(pricing.lines);
            subtotal += pricing.price;
        }
    }

    // Discount stack on the composed subtotal
    let discounted = apply_discounts(catalog, subtotal, &config.client_profile);

    // Guard the share division: a zero count cannot reach here past
    // validate(), but this derivation must never produce Infinity/NaN.
    let per_location = if config.locations > 0 {
        round_money(discounted.total / Decimal::from(config.locations), 2)
    } else {
        Decimal::ZERO
    };

    // Modules and watchtower never grant AI credits; only the tier does,
    // plus the early-adopter bonus.
    let mut ai_credits_total = tier.ai_credits;
    if config.client_profile.is_early_adopter {
        ai_credits_total += catalog.early_adopter().bonus_credits;
    }

    Ok(Quote::Priced(PriceResult {
        subtotal,
        total: discounted.total,
        discounts_applied: discounted.discounts,
        per_location,
        annual_total: discounted.total * dec!(12),
        ai_credits_total,
        ai_seats_total: tier.ai_seats,
        breakdown,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ClientType, Layer, TierId, WatchtowerId};
    use crate::pricing::config::ClientProfile;

    fn priced(quote: Quote) -> PriceResult {
        match quote {
            Quote::Priced(result) => result,
            Quote::ContactSales { reason } => panic!("expected a priced quote, got: {}", reason),
        }
    }

    fn growth_config() -> Configuration {
        Configuration::new(
            Layer::Core,
            TierId::Pro,
            5,
            ClientProfile::new(ClientType::Growth),
        )
    }

    #[test]
    fn test_tier_only_quote() {
        let catalog = Catalog::current();
        let result = priced(calculate_full_price(&catalog, &growth_config()).unwrap());

        // Core Pro at 5 locations, 10% growth discount.
        assert_eq!(result.subtotal, dec!(515));
        assert_eq!(result.total, dec!(463.50));
        assert_eq!(result.per_location, dec!(92.70));
        assert_eq!(result.annual_total, dec!(5562.00));
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].item, "Sundae Core Pro");
    }

    #[test]
    fn test_full_configuration_composes_all_parts() {
        let catalog = Catalog::current();
        let config = growth_config()
            .with_locations(10)
            .toggle_module(ModuleId::Labor)
            .toggle_watchtower(WatchtowerId::Bundle);
        let result = priced(calculate_full_price(&catalog, &config).unwrap());

        // tier 199+9*79=910, labor 234, bundle 720+9*82=1458
        assert_eq!(result.subtotal, dec!(910) + dec!(234) + dec!(1458));
        // Breakdown: tier, labor (with overage note), consolidated bundle.
        assert_eq!(result.breakdown.len(), 3);
        assert!(result.breakdown[1].note.as_deref().unwrap().contains("5 locations"));
        assert_eq!(result.breakdown[2].item, "Watchtower Bundle");
    }

    #[test]
    fn test_ai_totals_come_from_tier_and_early_adopter_only() {
        let catalog = Catalog::current();
        let mut config = growth_config()
            .toggle_module(ModuleId::Marketing)
            .toggle_watchtower(WatchtowerId::Events);
        let without = priced(calculate_full_price(&catalog, &config).unwrap());
        // Core Pro at 5: 2000 + 4*250.
        assert_eq!(without.ai_credits_total, 3000);
        assert_eq!(without.ai_seats_total, 10);

        config.client_profile.is_early_adopter = true;
        let with_bonus = priced(calculate_full_price(&catalog, &config).unwrap());
        assert_eq!(with_bonus.ai_credits_total, 3500);
    }

    #[test]
    fn test_contact_sales_propagates_from_watchtower() {
        let catalog = Catalog::current();
        let mut config = growth_config()
            .with_locations(300)
            .toggle_watchtower(WatchtowerId::Bundle);
        config.client_profile = ClientProfile::new(ClientType::Enterprise);

        match calculate_full_price(&catalog, &config).unwrap() {
            Quote::ContactSales { reason } => assert!(reason.contains("300")),
            Quote::Priced(_) => panic!("expected contact sales above the rate table"),
        }
    }

    #[test]
    fn test_invalid_locations_rejected() {
        let catalog = Catalog::current();
        let config = growth_config().with_locations(0);
        assert!(matches!(
            calculate_full_price(&catalog, &config),
            Err(PricingError::InvalidLocations { .. })
        ));
    }

    #[test]
    fn test_idempotence() {
        let catalog = Catalog::current();
        let mut config = growth_config()
            .with_locations(12)
            .toggle_module(ModuleId::Labor)
            .toggle_module(ModuleId::Insights)
            .toggle_watchtower(WatchtowerId::Competitive);
        config.client_profile.is_early_adopter = true;
        config.client_profile.custom_discount_percent = Some(dec!(5));

        let first = priced(calculate_full_price(&catalog, &config).unwrap());
        let second = priced(calculate_full_price(&catalog, &config).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_discount_amounts_reconcile_with_total() {
        let catalog = Catalog::current();
        let mut config = growth_config().with_locations(7).toggle_module(ModuleId::Labor);
        config.client_profile.is_early_adopter = true;
        config.client_profile.custom_discount_percent = Some(dec!(3));

        let result = priced(calculate_full_price(&catalog, &config).unwrap());
        let discounted: Decimal = result.discounts_applied.iter().map(|d| d.amount).sum();
        assert_eq!(round_money(result.subtotal + discounted, 2), result.total);
    }

    #[test]
    fn test_subtotal_matches_breakdown_sum() {
        let catalog = Catalog::current();
        let config = growth_config()
            .with_locations(8)
            .toggle_module(ModuleId::Marketing)
            .toggle_module(ModuleId::Inventory)
            .toggle_watchtower(WatchtowerId::Trends);
        let result = priced(calculate_full_price(&catalog, &config).unwrap());
        let lines: Decimal = result.breakdown.iter().map(|l| l.price).sum();
        assert_eq!(lines, result.subtotal);
    }
}
