//! Enterprise pricing models.
//!
//! Above the enterprise threshold two alternative structures replace the
//! standard stack: a flat volume fee selected by location range, and an
//! org-license model of a base fee plus graduated per-location bands. Both
//! are pure functions of the location count; neither stacks with the
//! percentage discounts.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{Catalog, ENTERPRISE_THRESHOLD};
use crate::pricing::PricingError;

/// Volume-model outcome: a listed flat fee, or the open-ended custom tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumePrice {
    Monthly(Decimal),
    Custom,
}

/// Which enterprise model a profile should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnterpriseModel {
    Volume,
    OrgLicense,
}

/// Both models side by side, with the recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnterpriseRecommendation {
    pub volume: VolumePrice,
    pub org_license: Decimal,
    pub recommended: EnterpriseModel,
}

/// Flat monthly fee for `locations` from the volume tier table.
///
/// The final, open-ended tier carries no listed fee and resolves to
/// [`VolumePrice::Custom`]: contact sales, never an extrapolated rate.
pub fn calculate_enterprise_volume(
    catalog: &Catalog,
    locations: u32,
) -> Result<VolumePrice, PricingError> {
    if locations < ENTERPRISE_THRESHOLD {
        return Err(PricingError::NotEnterpriseScale {
            locations,
            threshold: ENTERPRISE_THRESHOLD,
        });
    }

    let tier = catalog
        .volume_tiers()
        .into_iter()
        .find(|t| t.locations.contains(locations));

    Ok(match tier.and_then(|t| t.monthly) {
        Some(monthly) => VolumePrice::Monthly(monthly),
        None => VolumePrice::Custom,
    })
}

/// Org-license monthly fee: base fee plus graduated band rates.
///
/// Bands are consumed greedily from lowest to highest until every location
/// is accounted for: each location bills at its own band's rate, not the
/// whole count at one rate.
pub fn calculate_enterprise_org(catalog: &Catalog, locations: u32) -> Decimal {
    let model = catalog.org_license();
    let banded: Decimal = model
        .bands
        .iter()
        .map(|band| Decimal::from(band.locations_in_band(locations)) * band.rate)
        .sum();
    model.base_fee + banded
}

/// Recommend an enterprise model for a profile.
///
/// Multi-brand organizations always get org-license; brand-wide licensing
/// is a structural requirement, not a cost question. Otherwise the cheaper
/// model wins, and a custom volume result disqualifies the volume model.
pub fn recommend_enterprise_model(
    catalog: &Catalog,
    locations: u32,
    brand_count: u32,
) -> Result<EnterpriseRecommendation, PricingError> {
    let volume = calculate_enterprise_volume(catalog, locations)?;
    let org_license = calculate_enterprise_org(catalog, locations);

    let recommended = if brand_count > 1 {
        EnterpriseModel::OrgLicense
    } else {
        match volume {
            VolumePrice::Custom => EnterpriseModel::OrgLicense,
            VolumePrice::Monthly(monthly) if monthly <= org_license => EnterpriseModel::Volume,
            VolumePrice::Monthly(_) => EnterpriseModel::OrgLicense,
        }
    };

    Ok(EnterpriseRecommendation {
        volume,
        org_license,
        recommended,
    })
}
