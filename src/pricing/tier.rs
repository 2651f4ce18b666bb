//! Base tier pricing.

use rust_decimal::Decimal;

use crate::catalog::{Catalog, Layer, TierId};

/// Priced base tier with its AI entitlements.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPrice {
    pub price: Decimal,
    pub ai_credits: u32,
    pub ai_seats: u32,
}

/// Price the base product tier for a location count.
///
/// The base price always covers location #1; every location beyond it bills
/// at the tier's additional-location rate. AI credits scale the same way;
/// seats are a per-tier constant and never scale with locations.
///
/// Callers guarantee `locations >= 1` (see `Configuration::validate`).
pub fn calculate_tier_price(
    catalog: &Catalog,
    layer: Layer,
    tier: TierId,
    locations: u32,
) -> TierPrice {
    let def = catalog.tier(layer, tier);
    let additional = locations.saturating_sub(1);

    TierPrice {
        price: def.base_price + Decimal::from(additional) * def.additional_location_price,
        ai_credits: def.ai_credits.base + additional * def.ai_credits.per_location,
        ai_seats: def.ai_seats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_location_is_base_price() {
        let catalog = Catalog::current();
        for layer in Layer::ALL {
            for tier in TierId::ALL {
                let def = catalog.tier(layer, tier);
                let priced = calculate_tier_price(&catalog, layer, tier, 1);
                assert_eq!(priced.price, def.base_price);
                assert_eq!(priced.ai_credits, def.ai_credits.base);
            }
        }
    }

    #[test]
    fn test_report_plus_at_five_locations() {
        let catalog = Catalog::current();
        let priced = calculate_tier_price(&catalog, Layer::Report, TierId::Plus, 5);
        // 49 + 4 * 29
        assert_eq!(priced.price, dec!(165));
    }

    #[test]
    fn test_core_pro_at_five_locations() {
        let catalog = Catalog::current();
        let priced = calculate_tier_price(&catalog, Layer::Core, TierId::Pro, 5);
        // 199 + 4 * 79
        assert_eq!(priced.price, dec!(515));
        assert_eq!(priced.ai_credits, 2000 + 4 * 250);
        assert_eq!(priced.ai_seats, 10);
    }

    #[test]
    fn test_core_pro_costs_more_than_core_lite_at_every_count() {
        let catalog = Catalog::current();
        for locations in 1..=60 {
            let pro = calculate_tier_price(&catalog, Layer::Core, TierId::Pro, locations);
            let lite = calculate_tier_price(&catalog, Layer::Core, TierId::Lite, locations);
            assert!(
                pro.price > lite.price,
                "pro must dominate lite at {} locations",
                locations
            );
        }
    }

    #[test]
    fn test_seats_never_scale_with_locations() {
        let catalog = Catalog::current();
        let at_one = calculate_tier_price(&catalog, Layer::Core, TierId::Plus, 1);
        let at_forty = calculate_tier_price(&catalog, Layer::Core, TierId::Plus, 40);
        assert_eq!(at_one.ai_seats, at_forty.ai_seats);
    }
}
