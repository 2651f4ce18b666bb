//! Static, versioned pricing reference data.
//!
//! The catalog is read-only: every definition lives in a total match table
//! and is immutable for the lifetime of a pricing epoch. Calculators take a
//! `&Catalog` explicitly so the engine never reads hidden global state.

pub mod clients;
pub mod enterprise;
pub mod modules;
pub mod tiers;
pub mod watchtower;

use chrono::NaiveDate;
use serde::Serialize;

pub use clients::{
    ClientType, ClientTypeRule, EarlyAdopterTerms, LocationRange, PricingModel,
};
pub use enterprise::{
    EnterpriseOrgLicense, EnterpriseOrgLicenseBand, EnterpriseVolumeTier, ENTERPRISE_THRESHOLD,
};
pub use modules::{ModuleDefinition, ModuleId, MODULE_INCLUDED_LOCATIONS};
pub use tiers::{AiCredits, Layer, TierDefinition, TierId};
pub use watchtower::{
    WatchtowerBundleDefinition, WatchtowerEnterpriseTier, WatchtowerId, WatchtowerModule,
    WatchtowerModuleDefinition, WATCHTOWER_ENTERPRISE_THRESHOLD,
};

/// Handle to one pricing epoch's reference data.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: &'static str,
}

impl Catalog {
    /// The active pricing epoch.
    pub fn current() -> Self {
        Catalog { version: "2025-07" }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Date this epoch's prices took effect.
    pub fn effective(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default()
    }

    pub fn tier(&self, layer: Layer, tier: TierId) -> TierDefinition {
        TierDefinition::get(layer, tier)
    }

    pub fn module(&self, id: ModuleId) -> ModuleDefinition {
        ModuleDefinition::get(id)
    }

    pub fn watchtower_module(&self, module: WatchtowerModule) -> WatchtowerModuleDefinition {
        WatchtowerModuleDefinition::get(module)
    }

    pub fn watchtower_bundle(&self) -> WatchtowerBundleDefinition {
        WatchtowerBundleDefinition::get()
    }

    pub fn watchtower_enterprise_tier(&self, locations: u32) -> Option<WatchtowerEnterpriseTier> {
        WatchtowerEnterpriseTier::for_locations(locations)
    }

    pub fn client_rule(&self, client_type: ClientType) -> ClientTypeRule {
        ClientTypeRule::get(client_type)
    }

    pub fn early_adopter(&self) -> EarlyAdopterTerms {
        EarlyAdopterTerms::get()
    }

    pub fn volume_tiers(&self) -> Vec<EnterpriseVolumeTier> {
        EnterpriseVolumeTier::table()
    }

    pub fn org_license(&self) -> EnterpriseOrgLicense {
        EnterpriseOrgLicense::get()
    }

    /// Materialize the full catalog for read-only host-UI consumption.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            version: self.version,
            effective: self.effective(),
            tiers: Layer::ALL
                .iter()
                .flat_map(|layer| TierId::ALL.iter().map(|tier| self.tier(*layer, *tier)))
                .collect(),
            modules: ModuleId::ALL.iter().map(|id| self.module(*id)).collect(),
            watchtower_modules: WatchtowerModule::ALL
                .iter()
                .map(|m| self.watchtower_module(*m))
                .collect(),
            watchtower_bundle: self.watchtower_bundle(),
            watchtower_enterprise: WatchtowerEnterpriseTier::table(),
            client_rules: ClientType::ALL
                .iter()
                .map(|t| self.client_rule(*t))
                .collect(),
            early_adopter: self.early_adopter(),
            enterprise_volume: self.volume_tiers(),
            enterprise_org_license: self.org_license(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::current()
    }
}

/// Serializable view of one pricing epoch.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub version: &'static str,
    pub effective: NaiveDate,
    pub tiers: Vec<TierDefinition>,
    pub modules: Vec<ModuleDefinition>,
    pub watchtower_modules: Vec<WatchtowerModuleDefinition>,
    pub watchtower_bundle: WatchtowerBundleDefinition,
    pub watchtower_enterprise: Vec<WatchtowerEnterpriseTier>,
    pub client_rules: Vec<ClientTypeRule>,
    pub early_adopter: EarlyAdopterTerms,
    pub enterprise_volume: Vec<EnterpriseVolumeTier>,
    pub enterprise_org_license: EnterpriseOrgLicense,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_complete() {
        let snapshot = Catalog::current().snapshot();
        assert_eq!(snapshot.version, "2025-07");
        assert_eq!(snapshot.tiers.len(), 6);
        assert_eq!(snapshot.modules.len(), 4);
        assert_eq!(snapshot.watchtower_modules.len(), 3);
        assert_eq!(snapshot.client_rules.len(), 5);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = Catalog::current().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["version"], "2025-07");
        // Money fields go over the wire as strings.
        assert_eq!(json["watchtower_bundle"]["base_price"], "720");
    }
}
