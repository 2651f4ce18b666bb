//! Add-on module pricing.

use rust_decimal::Decimal;

use crate::catalog::{Catalog, ModuleId};

/// Price one add-on module for a location count.
///
/// `org_license_price` covers the first five locations; only locations
/// beyond those bill at the per-location rate. Modules are summed
/// independently by the composer; there is no cross-module combo pricing.
pub fn calculate_module_price(catalog: &Catalog, module: ModuleId, locations: u32) -> Decimal {
    let def = catalog.module(module);
    let overage = locations.saturating_sub(def.included_locations);
    def.org_license_price + Decimal::from(overage) * def.per_location_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_labor_at_ten_locations() {
        let catalog = Catalog::current();
        // 139 + 5 * 19
        assert_eq!(
            calculate_module_price(&catalog, ModuleId::Labor, 10),
            dec!(234)
        );
    }

    #[test]
    fn test_org_license_covers_included_locations() {
        let catalog = Catalog::current();
        for module in ModuleId::ALL {
            let def = catalog.module(module);
            // No overage at or below the included count.
            for locations in 1..=def.included_locations {
                assert_eq!(
                    calculate_module_price(&catalog, module, locations),
                    def.org_license_price
                );
            }
            assert_eq!(
                calculate_module_price(&catalog, module, def.included_locations + 1),
                def.org_license_price + def.per_location_price
            );
        }
    }
}
