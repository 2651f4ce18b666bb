//! Add-on module definitions for the Core layer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::pricing::PricingError;

/// Locations covered by every module's org license before overage billing.
pub const MODULE_INCLUDED_LOCATIONS: u32 = 5;

/// Optional add-on module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    Labor,
    Marketing,
    Inventory,
    Insights,
}

impl ModuleId {
    pub const ALL: [ModuleId; 4] = [
        ModuleId::Labor,
        ModuleId::Marketing,
        ModuleId::Inventory,
        ModuleId::Insights,
    ];

    /// Parse a module id from its wire representation (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, PricingError> {
        match s.to_lowercase().as_str() {
            "labor" => Ok(ModuleId::Labor),
            "marketing" => Ok(ModuleId::Marketing),
            "inventory" => Ok(ModuleId::Inventory),
            "insights" => Ok(ModuleId::Insights),
            _ => Err(PricingError::UnknownModule { id: s.to_string() }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Labor => "labor",
            ModuleId::Marketing => "marketing",
            ModuleId::Inventory => "inventory",
            ModuleId::Insights => "insights",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleId::Labor => "Labor",
            ModuleId::Marketing => "Marketing",
            ModuleId::Inventory => "Inventory",
            ModuleId::Insights => "Guest Insights",
        }
    }
}

/// Pricing for one add-on module: an org-wide license covering the first
/// [`MODULE_INCLUDED_LOCATIONS`] locations plus a per-location overage rate.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleDefinition {
    pub id: ModuleId,
    #[serde(with = "rust_decimal::serde::str")]
    pub org_license_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_location_price: Decimal,
    pub included_locations: u32,
}

impl ModuleDefinition {
    pub fn get(id: ModuleId) -> ModuleDefinition {
        let (org_license_price, per_location_price) = match id {
            ModuleId::Labor => (dec!(139), dec!(19)),
            ModuleId::Marketing => (dec!(119), dec!(15)),
            ModuleId::Inventory => (dec!(99), dec!(12)),
            ModuleId::Insights => (dec!(129), dec!(17)),
        };
        ModuleDefinition {
            id,
            org_license_price,
            per_location_price,
            included_locations: MODULE_INCLUDED_LOCATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_parse() {
        assert_eq!(ModuleId::parse("labor").unwrap(), ModuleId::Labor);
        assert!(matches!(
            ModuleId::parse("payroll"),
            Err(PricingError::UnknownModule { .. })
        ));
    }

    #[test]
    fn test_all_modules_include_five_locations() {
        for id in ModuleId::ALL {
            assert_eq!(ModuleDefinition::get(id).included_locations, 5);
        }
    }
}
