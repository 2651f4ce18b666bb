//! Competitor cost comparison engine.
//!
//! Independently estimates what each registered competitor would charge for
//! the same footprint, then contextualizes the composed Sundae total as
//! savings at monthly, first-year and ongoing granularity. Pure functions
//! throughout, like the pricing engine.

pub mod competitors;

pub use competitors::{Competitor, CompetitorPricing, Confidence};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::ModuleId;
use crate::pricing::{round_money, BreakdownLine};

/// A priced competitor estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedEstimate {
    pub monthly: Decimal,
    /// Twelve months plus any setup fees.
    pub first_year: Decimal,
    /// Annual run-rate after year one.
    pub ongoing: Decimal,
    pub setup_fee: Decimal,
    pub breakdown: Vec<BreakdownLine>,
}

/// Outcome of estimating one competitor: priced, or explicitly unpriceable
/// (all price fields absent, with a human-readable note), never a guessed
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub enum CompetitorEstimate {
    Priced(PricedEstimate),
    Unpriceable { note: String },
}

/// Savings against the Sundae total. Positive means Sundae is cheaper.
#[derive(Debug, Clone, PartialEq)]
pub struct Savings {
    pub monthly: Decimal,
    pub first_year: Decimal,
    pub ongoing: Decimal,
}

/// One competitor's row in a comparison batch.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub competitor_id: &'static str,
    pub competitor_name: &'static str,
    pub confidence: Confidence,
    pub notes: &'static str,
    pub estimate: CompetitorEstimate,
    /// Absent when the competitor is unpriceable.
    pub savings: Option<Savings>,
}

impl Competitor {
    /// Estimate this competitor's cost for a footprint.
    ///
    /// `modules` is the Sundae module selection, used to price the closest
    /// competitor add-on equivalents; `wants_intelligence` prices the
    /// competitor's intelligence product only when the configuration
    /// actually selects watchtower.
    pub fn estimate(
        &self,
        locations: u32,
        modules: &[ModuleId],
        wants_intelligence: bool,
    ) -> CompetitorEstimate {
        match &self.pricing {
            CompetitorPricing::QuoteOnly => CompetitorEstimate::Unpriceable {
                note: self.notes.to_string(),
            },
            CompetitorPricing::PerLocation {
                monthly_per_location,
                setup_per_location,
                addon_monthly_per_module,
                intelligence_monthly,
            } => {
                let locs = Decimal::from(locations);
                let mut monthly = locs * *monthly_per_location;
                let mut breakdown = vec![BreakdownLine::new(
                    format!(
                        "{} platform ({} locations x ${}/mo)",
                        self.name, locations, monthly_per_location
                    ),
                    monthly,
                )];

                if !modules.is_empty() && *addon_monthly_per_module > Decimal::ZERO {
                    let addons = Decimal::from(modules.len() as u32) * *addon_monthly_per_module;
                    breakdown.push(BreakdownLine::new(
                        format!("Add-ons ({} x ${}/mo)", modules.len(), addon_monthly_per_module),
                        addons,
                    ));
                    monthly += addons;
                }

                if wants_intelligence && *intelligence_monthly > Decimal::ZERO {
                    breakdown.push(BreakdownLine::new(
                        "Competitive intelligence add-on",
                        *intelligence_monthly,
                    ));
                    monthly += *intelligence_monthly;
                }

                let setup_fee = locs * *setup_per_location;
                if setup_fee > Decimal::ZERO {
                    breakdown.push(BreakdownLine::with_note(
                        "Onboarding",
                        setup_fee,
                        "One-time setup fee",
                    ));
                }

                CompetitorEstimate::Priced(priced(monthly, setup_fee, breakdown))
            }
            CompetitorPricing::PlatformPlusLocation {
                platform_monthly,
                monthly_per_location,
                setup_fee,
            } => {
                let per_locations = Decimal::from(locations) * *monthly_per_location;
                let monthly = *platform_monthly + per_locations;
                let mut breakdown = vec![
                    BreakdownLine::new(format!("{} platform fee", self.name), *platform_monthly),
                    BreakdownLine::new(
                        format!("{} locations x ${}/mo", locations, monthly_per_location),
                        per_locations,
                    ),
                ];
                if *setup_fee > Decimal::ZERO {
                    breakdown.push(BreakdownLine::with_note(
                        "Onboarding",
                        *setup_fee,
                        "One-time setup fee",
                    ));
                }

                CompetitorEstimate::Priced(priced(monthly, *setup_fee, breakdown))
            }
        }
    }
}

fn priced(monthly: Decimal, setup_fee: Decimal, breakdown: Vec<BreakdownLine>) -> PricedEstimate {
    let annual = monthly * dec!(12);
    PricedEstimate {
        monthly: round_money(monthly, 2),
        first_year: round_money(annual + setup_fee, 2),
        ongoing: round_money(annual, 2),
        setup_fee: round_money(setup_fee, 2),
        breakdown,
    }
}

/// Run the full registry against one configuration.
///
/// Unverified and hidden competitors are dropped before estimation.
/// Priceable results sort descending by first-year savings so the most
/// favorable comparison surfaces first; unpriceable ones keep their note and
/// sort last. A mixed batch is the normal case, not an error.
pub fn compare_all(
    locations: u32,
    modules: &[ModuleId],
    wants_intelligence: bool,
    sundae_monthly: Decimal,
) -> Vec<ComparisonResult> {
    let sundae_annual = sundae_monthly * dec!(12);

    let mut results: Vec<ComparisonResult> = Competitor::registry()
        .into_iter()
        .filter(|c| c.verified && !c.hidden)
        .map(|competitor| {
            let estimate = competitor.estimate(locations, modules, wants_intelligence);
            let savings = match &estimate {
                CompetitorEstimate::Priced(est) => Some(Savings {
                    monthly: round_money(est.monthly - sundae_monthly, 2),
                    first_year: round_money(est.first_year - sundae_annual, 2),
                    ongoing: round_money(est.ongoing - sundae_annual, 2),
                }),
                CompetitorEstimate::Unpriceable { .. } => None,
            };
            ComparisonResult {
                competitor_id: competitor.id,
                competitor_name: competitor.name,
                confidence: competitor.confidence,
                notes: competitor.notes,
                estimate,
                savings,
            }
        })
        .collect();

    results.sort_by(|a, b| match (&a.savings, &b.savings) {
        (Some(a), Some(b)) => b.first_year.cmp(&a.first_year),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    results
}
