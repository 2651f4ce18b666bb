//! Watchtower intelligence add-on pricing.
//!
//! Two regimes keyed on location count: base-plus-overage per module below
//! the enterprise threshold, a flat rate table at or above it. Selecting all
//! three individual modules is price-equivalent to selecting the bundle; the
//! calculator substitutes the cheaper bundle automatically and reports the
//! savings on the consolidated line.

use rust_decimal::Decimal;

use crate::catalog::{
    Catalog, WatchtowerEnterpriseTier, WatchtowerId, WatchtowerModule,
    WATCHTOWER_ENTERPRISE_THRESHOLD,
};
use crate::pricing::{BreakdownLine, PricingError};

/// What the user's raw watchtower ids resolve to, decided once before any
/// pricing math runs.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchtowerSelection {
    None,
    Individual(Vec<WatchtowerModule>),
    Bundle,
}

/// Resolve raw selection ids into a [`WatchtowerSelection`].
///
/// The bundle applies when its explicit id is present, or when all three
/// individual modules are selected together (the bundle is never the more
/// expensive option; see the catalog reconciliation test).
pub fn resolve_selection(ids: &[WatchtowerId]) -> WatchtowerSelection {
    if ids.contains(&WatchtowerId::Bundle) {
        return WatchtowerSelection::Bundle;
    }

    // Catalog order, deduplicated, so breakdown output is stable regardless
    // of click order.
    let modules: Vec<WatchtowerModule> = WatchtowerModule::ALL
        .into_iter()
        .filter(|m| ids.iter().any(|id| id.as_module() == Some(*m)))
        .collect();

    match modules.len() {
        0 => WatchtowerSelection::None,
        3 => WatchtowerSelection::Bundle,
        _ => WatchtowerSelection::Individual(modules),
    }
}

/// A priced watchtower selection.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchtowerPricing {
    pub price: Decimal,
    /// Present only when the bundle applied: what the same selection would
    /// have cost as individual modules, minus the bundle price.
    pub savings: Option<Decimal>,
    pub lines: Vec<BreakdownLine>,
}

impl WatchtowerPricing {
    fn empty() -> Self {
        WatchtowerPricing {
            price: Decimal::ZERO,
            savings: None,
            lines: Vec::new(),
        }
    }
}

/// Outcome of watchtower pricing: a priced selection, or the explicit
/// contact-sales sentinel for counts above the enterprise rate table. The
/// sentinel is a valid terminal state, distinct from a priced zero.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchtowerQuote {
    Priced(WatchtowerPricing),
    ContactSales,
}

/// Price a watchtower selection for a location count.
pub fn calculate_watchtower_price(
    catalog: &Catalog,
    ids: &[WatchtowerId],
    locations: u32,
) -> Result<WatchtowerQuote, PricingError> {
    let selection = resolve_selection(ids);

    if matches!(selection, WatchtowerSelection::None) {
        return Ok(WatchtowerQuote::Priced(WatchtowerPricing::empty()));
    }

    if locations >= WATCHTOWER_ENTERPRISE_THRESHOLD {
        enterprise_regime(catalog, &selection, locations)
    } else {
        sub_enterprise_regime(catalog, &selection, locations)
    }
}

/// Locations 1–29: per-module base plus per-location overage beyond the
/// first location.
fn sub_enterprise_regime(
    catalog: &Catalog,
    selection: &WatchtowerSelection,
    locations: u32,
) -> Result<WatchtowerQuote, PricingError> {
    let additional = Decimal::from(locations.saturating_sub(1));

    match selection {
        WatchtowerSelection::None => Ok(WatchtowerQuote::Priced(WatchtowerPricing::empty())),
        WatchtowerSelection::Individual(modules) => {
            let mut lines = Vec::with_capacity(modules.len());
            let mut total = Decimal::ZERO;
            for module in modules {
                let def = catalog.watchtower_module(*module);
                let price = def.base_price + additional * def.per_location_price;
                total += price;
                lines.push(BreakdownLine::new(module.display_name(), price));
            }
            Ok(WatchtowerQuote::Priced(WatchtowerPricing {
                price: total,
                savings: None,
                lines,
            }))
        }
        WatchtowerSelection::Bundle => {
            let bundle = catalog.watchtower_bundle();
            let bundle_total = bundle.base_price + additional * bundle.per_location_price;

            // What the three modules would have cost individually.
            let individual_total: Decimal = bundle
                .includes
                .iter()
                .map(|m| {
                    let def = catalog.watchtower_module(*m);
                    def.base_price + additional * def.per_location_price
                })
                .sum();

            let savings = individual_total - bundle_total;
            if savings < Decimal::ZERO {
                // The bundle discount is pre-baked into the catalog; a
                // negative figure means the tables no longer reconcile.
                return Err(PricingError::CatalogIntegrity {
                    message: format!(
                        "bundle at {} locations costs {} more than individual modules",
                        locations, -savings
                    ),
                });
            }

            Ok(WatchtowerQuote::Priced(WatchtowerPricing {
                price: bundle_total,
                savings: Some(savings),
                lines: vec![bundle_line(bundle_total, savings)],
            }))
        }
    }
}

/// Locations 30+: flat prices from the enterprise rate table, not scaled per
/// location. Above the table's last range there is no listed price.
fn enterprise_regime(
    catalog: &Catalog,
    selection: &WatchtowerSelection,
    locations: u32,
) -> Result<WatchtowerQuote, PricingError> {
    let tier = match catalog.watchtower_enterprise_tier(locations) {
        Some(tier) => tier,
        None => return Ok(WatchtowerQuote::ContactSales),
    };

    match selection {
        WatchtowerSelection::None => Ok(WatchtowerQuote::Priced(WatchtowerPricing::empty())),
        WatchtowerSelection::Individual(modules) => {
            let mut lines = Vec::with_capacity(modules.len());
            let mut total = Decimal::ZERO;
            for module in modules {
                let price = tier.module_price(*module);
                total += price;
                lines.push(BreakdownLine::with_note(
                    module.display_name(),
                    price,
                    enterprise_note(&tier),
                ));
            }
            Ok(WatchtowerQuote::Priced(WatchtowerPricing {
                price: total,
                savings: None,
                lines,
            }))
        }
        WatchtowerSelection::Bundle => {
            let individual_total: Decimal = WatchtowerModule::ALL
                .iter()
                .map(|m| tier.module_price(*m))
                .sum();
            let savings = individual_total - tier.bundle;
            if savings < Decimal::ZERO {
                return Err(PricingError::CatalogIntegrity {
                    message: format!(
                        "enterprise bundle for {}-{} locations costs {} more than individual modules",
                        tier.min_locations, tier.max_locations, -savings
                    ),
                });
            }

            Ok(WatchtowerQuote::Priced(WatchtowerPricing {
                price: tier.bundle,
                savings: Some(savings),
                lines: vec![bundle_line(tier.bundle, savings)],
            }))
        }
    }
}

/// The consolidated bundle line shown even when the user picked three
/// individual ids, so downstream receipts carry one item plus the savings
/// annotation.
fn bundle_line(price: Decimal, savings: Decimal) -> BreakdownLine {
    BreakdownLine::with_note(
        "Watchtower Bundle",
        price,
        format!(
            "Includes Competitive, Events & Trends; saves ${}/mo vs individual modules",
            savings
        ),
    )
}

fn enterprise_note(tier: &WatchtowerEnterpriseTier) -> String {
    format!(
        "Enterprise rate for {}-{} locations",
        tier.min_locations, tier.max_locations
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn priced(quote: WatchtowerQuote) -> WatchtowerPricing {
        match quote {
            WatchtowerQuote::Priced(pricing) => pricing,
            WatchtowerQuote::ContactSales => panic!("expected a priced quote"),
        }
    }

    // ==================== selection resolution ====================

    #[test]
    fn test_resolve_empty_selection() {
        assert_eq!(resolve_selection(&[]), WatchtowerSelection::None);
    }

    #[test]
    fn test_resolve_explicit_bundle() {
        assert_eq!(
            resolve_selection(&[WatchtowerId::Bundle]),
            WatchtowerSelection::Bundle
        );
        // Bundle id wins even when mixed with individual ids.
        assert_eq!(
            resolve_selection(&[WatchtowerId::Events, WatchtowerId::Bundle]),
            WatchtowerSelection::Bundle
        );
    }

    #[test]
    fn test_resolve_all_three_individuals_becomes_bundle() {
        assert_eq!(
            resolve_selection(&[
                WatchtowerId::Trends,
                WatchtowerId::Competitive,
                WatchtowerId::Events,
            ]),
            WatchtowerSelection::Bundle
        );
    }

    #[test]
    fn test_resolve_partial_selection_stays_individual() {
        assert_eq!(
            resolve_selection(&[WatchtowerId::Events, WatchtowerId::Competitive]),
            WatchtowerSelection::Individual(vec![
                WatchtowerModule::Competitive,
                WatchtowerModule::Events,
            ])
        );
    }

    #[test]
    fn test_resolve_dedupes_repeated_ids() {
        assert_eq!(
            resolve_selection(&[WatchtowerId::Events, WatchtowerId::Events]),
            WatchtowerSelection::Individual(vec![WatchtowerModule::Events])
        );
    }

    // ==================== sub-enterprise regime ====================

    #[test]
    fn test_bundle_at_one_location() {
        let catalog = Catalog::current();
        let pricing = priced(
            calculate_watchtower_price(&catalog, &[WatchtowerId::Bundle], 1).unwrap(),
        );
        assert_eq!(pricing.price, dec!(720));
        assert_eq!(pricing.savings, Some(dec!(127)));
    }

    #[test]
    fn test_bundle_at_five_locations() {
        let catalog = Catalog::current();
        let pricing = priced(
            calculate_watchtower_price(&catalog, &[WatchtowerId::Bundle], 5).unwrap(),
        );
        // 720 + 4 * 82
        assert_eq!(pricing.price, dec!(1048));
    }

    #[test]
    fn test_auto_bundle_substitution_reports_savings() {
        let catalog = Catalog::current();
        let ids = [
            WatchtowerId::Competitive,
            WatchtowerId::Events,
            WatchtowerId::Trends,
        ];
        let pricing = priced(calculate_watchtower_price(&catalog, &ids, 1).unwrap());
        assert_eq!(pricing.price, dec!(720));
        assert_eq!(pricing.savings, Some(dec!(127)));

        // One consolidated line, not three.
        assert_eq!(pricing.lines.len(), 1);
        assert_eq!(pricing.lines[0].item, "Watchtower Bundle");
        assert!(pricing.lines[0].note.as_deref().unwrap().contains("saves"));
    }

    #[test]
    fn test_individual_modules_price_and_lines() {
        let catalog = Catalog::current();
        let ids = [WatchtowerId::Competitive, WatchtowerId::Events];
        let pricing = priced(calculate_watchtower_price(&catalog, &ids, 3).unwrap());
        // competitive 329 + 2*39, events 259 + 2*29
        assert_eq!(pricing.price, dec!(407) + dec!(317));
        assert_eq!(pricing.savings, None);
        assert_eq!(pricing.lines.len(), 2);
    }

    #[test]
    fn test_empty_selection_prices_to_zero() {
        let catalog = Catalog::current();
        let pricing = priced(calculate_watchtower_price(&catalog, &[], 12).unwrap());
        assert_eq!(pricing.price, Decimal::ZERO);
        assert!(pricing.lines.is_empty());
    }

    // ==================== enterprise regime ====================

    #[test]
    fn test_enterprise_bundle_is_flat() {
        let catalog = Catalog::current();
        let at_30 = priced(
            calculate_watchtower_price(&catalog, &[WatchtowerId::Bundle], 30).unwrap(),
        );
        let at_49 = priced(
            calculate_watchtower_price(&catalog, &[WatchtowerId::Bundle], 49).unwrap(),
        );
        assert_eq!(at_30.price, dec!(2400));
        // Same tier, same flat price: no per-location scaling.
        assert_eq!(at_30.price, at_49.price);
    }

    #[test]
    fn test_enterprise_individual_modules_are_flat_sums() {
        let catalog = Catalog::current();
        let ids = [WatchtowerId::Competitive, WatchtowerId::Trends];
        let pricing = priced(calculate_watchtower_price(&catalog, &ids, 75).unwrap());
        // 50-99 tier: competitive 1500, trends 1400
        assert_eq!(pricing.price, dec!(2900));
    }

    #[test]
    fn test_enterprise_auto_bundle_applies_above_threshold() {
        let catalog = Catalog::current();
        let ids = [
            WatchtowerId::Competitive,
            WatchtowerId::Events,
            WatchtowerId::Trends,
        ];
        let pricing = priced(calculate_watchtower_price(&catalog, &ids, 100).unwrap());
        assert_eq!(pricing.price, dec!(6500));
        // 2600 + 2400 + 2400 - 6500
        assert_eq!(pricing.savings, Some(dec!(900)));
    }

    #[test]
    fn test_above_rate_table_is_contact_sales() {
        let catalog = Catalog::current();
        let quote = calculate_watchtower_price(&catalog, &[WatchtowerId::Bundle], 300).unwrap();
        assert_eq!(quote, WatchtowerQuote::ContactSales);
    }
}
