//! Enterprise pricing rate tables: flat volume tiers and banded org-license
//! rates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::clients::LocationRange;

/// Location count at which enterprise pricing models become available.
pub const ENTERPRISE_THRESHOLD: u32 = 30;

/// One flat-fee volume tier. `monthly: None` marks the open-ended final tier
/// with no listed fee (custom pricing).
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseVolumeTier {
    pub locations: LocationRange,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub monthly: Option<Decimal>,
}

impl EnterpriseVolumeTier {
    /// The ordered volume tier table.
    pub fn table() -> Vec<EnterpriseVolumeTier> {
        vec![
            EnterpriseVolumeTier {
                locations: LocationRange { min: 30, max: Some(49) },
                monthly: Some(dec!(3999)),
            },
            EnterpriseVolumeTier {
                locations: LocationRange { min: 50, max: Some(99) },
                monthly: Some(dec!(6999)),
            },
            EnterpriseVolumeTier {
                locations: LocationRange { min: 100, max: Some(249) },
                monthly: Some(dec!(11999)),
            },
            EnterpriseVolumeTier {
                locations: LocationRange { min: 250, max: None },
                monthly: None,
            },
        ]
    }
}

/// One graduated org-license rate band covering `range_start..=range_end`
/// (inclusive, `None` = open) at its own per-location rate.
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseOrgLicenseBand {
    pub range_start: u32,
    pub range_end: Option<u32>,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
}

impl EnterpriseOrgLicenseBand {
    /// How many of `locations` fall inside this band.
    pub fn locations_in_band(&self, locations: u32) -> u32 {
        if locations < self.range_start {
            return 0;
        }
        let top = self.range_end.unwrap_or(locations).min(locations);
        top - self.range_start + 1
    }
}

/// The org-license pricing model: a base fee plus graduated per-location
/// bands consumed from lowest to highest.
#[derive(Debug, Clone, Serialize)]
pub struct EnterpriseOrgLicense {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_fee: Decimal,
    pub bands: Vec<EnterpriseOrgLicenseBand>,
}

impl EnterpriseOrgLicense {
    pub fn get() -> EnterpriseOrgLicense {
        EnterpriseOrgLicense {
            base_fee: dec!(2500),
            bands: vec![
                EnterpriseOrgLicenseBand {
                    range_start: 1,
                    range_end: Some(10),
                    rate: dec!(99),
                },
                EnterpriseOrgLicenseBand {
                    range_start: 11,
                    range_end: Some(30),
                    rate: dec!(79),
                },
                EnterpriseOrgLicenseBand {
                    range_start: 31,
                    range_end: Some(100),
                    rate: dec!(59),
                },
                EnterpriseOrgLicenseBand {
                    range_start: 101,
                    range_end: None,
                    rate: dec!(39),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_table_covers_enterprise_range_contiguously() {
        let table = EnterpriseVolumeTier::table();
        assert_eq!(table[0].locations.min, ENTERPRISE_THRESHOLD);
        for pair in table.windows(2) {
            let upper = pair[0].locations.max.expect("only the last tier is open");
            assert_eq!(pair[1].locations.min, upper + 1);
        }
        // Final tier is the open-ended custom one.
        let last = table.last().unwrap();
        assert!(last.locations.max.is_none());
        assert!(last.monthly.is_none());
    }

    #[test]
    fn test_locations_in_band() {
        let band = EnterpriseOrgLicenseBand {
            range_start: 11,
            range_end: Some(30),
            rate: dec!(79),
        };
        assert_eq!(band.locations_in_band(10), 0);
        assert_eq!(band.locations_in_band(11), 1);
        assert_eq!(band.locations_in_band(25), 15);
        assert_eq!(band.locations_in_band(40), 20); // capped at band size

        let open = EnterpriseOrgLicenseBand {
            range_start: 101,
            range_end: None,
            rate: dec!(39),
        };
        assert_eq!(open.locations_in_band(100), 0);
        assert_eq!(open.locations_in_band(150), 50);
    }

    #[test]
    fn test_org_license_bands_are_contiguous_from_one() {
        let model = EnterpriseOrgLicense::get();
        assert_eq!(model.bands[0].range_start, 1);
        for pair in model.bands.windows(2) {
            let upper = pair[0].range_end.expect("only the last band is open");
            assert_eq!(pair[1].range_start, upper + 1);
        }
        assert!(model.bands.last().unwrap().range_end.is_none());
    }
}
