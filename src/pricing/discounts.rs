//! Ordered discount stacking.
//!
//! Discounts compound multiplicatively in a fixed business order: client
//! type, then early adopter, then negotiated. Each step's percentage is
//! taken of the running total left by the previous step, never of the
//! original subtotal, and rounding happens once on the final figure.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::catalog::{Catalog, PricingModel};
use crate::pricing::{round_money, ClientProfile};

/// One applied discount, for receipt transparency. `amount` is negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountLine {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub percent: Decimal,
}

/// Result of applying the discount stack to a subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountedTotal {
    pub total: Decimal,
    pub discounts: Vec<DiscountLine>,
}

/// Apply the ordered discount chain to a subtotal.
///
/// Clients on the enterprise pricing model never receive the client-type
/// percentage, regardless of the rule's nominal tier; enterprise pricing
/// goes through the volume/org-license models instead.
pub fn apply_discounts(
    catalog: &Catalog,
    subtotal: Decimal,
    profile: &ClientProfile,
) -> DiscountedTotal {
    let mut running = subtotal;
    let mut discounts = Vec::new();

    // 1. Client type
    let rule = catalog.client_rule(profile.effective_client_type());
    if rule.pricing_model != PricingModel::Enterprise && rule.discount_percent > Decimal::ZERO {
        apply_step(
            &mut running,
            &mut discounts,
            format!("{} discount", rule.client_type.display_name()),
            rule.discount_percent,
        );
    }

    // 2. Early adopter, on the remainder
    if profile.is_early_adopter {
        let terms = catalog.early_adopter();
        if terms.discount_percent > Decimal::ZERO {
            apply_step(
                &mut running,
                &mut discounts,
                "Early adopter discount".to_string(),
                terms.discount_percent,
            );
        }
    }

    // 3. Negotiated, on the remainder
    if let Some(percent) = profile.custom_discount_percent {
        let percent = percent.clamp(Decimal::ZERO, dec!(100));
        if percent > Decimal::ZERO {
            apply_step(
                &mut running,
                &mut discounts,
                "Negotiated discount".to_string(),
                percent,
            );
        }
    }

    DiscountedTotal {
        total: round_money(running, 2),
        discounts,
    }
}

fn apply_step(
    running: &mut Decimal,
    discounts: &mut Vec<DiscountLine>,
    name: String,
    percent: Decimal,
) {
    let amount = *running * percent / dec!(100);
    *running -= amount;
    discounts.push(DiscountLine {
        name,
        amount: -amount,
        percent,
    });
}
