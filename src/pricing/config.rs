//! Configuration value objects.
//!
//! A [`Configuration`] captures one user session's selections. It is
//! immutable: the host store evolves it through the transition methods
//! below, each of which produces a new value, and the engine recomputes the
//! full price from scratch on every change. There is no cached or stateful
//! pricing session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{ClientType, Layer, ModuleId, TierId, WatchtowerId};
use crate::pricing::PricingError;

/// Who is buying: segmentation and program flags driving the discount stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub client_type: ClientType,
    pub is_early_adopter: bool,
    pub is_franchise: bool,
    pub brand_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_discount_percent: Option<Decimal>,
}

impl ClientProfile {
    pub fn new(client_type: ClientType) -> Self {
        ClientProfile {
            client_type,
            is_early_adopter: false,
            is_franchise: false,
            brand_count: 1,
            custom_discount_percent: None,
        }
    }

    /// The client type whose discount rule applies: a franchise flag routes
    /// to the franchise rule regardless of the declared type, since
    /// franchise discounting follows brand structure rather than raw
    /// location count.
    pub fn effective_client_type(&self) -> ClientType {
        if self.is_franchise {
            ClientType::Franchise
        } else {
            self.client_type
        }
    }
}

/// One user session's product selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub layer: Layer,
    pub tier: TierId,
    pub locations: u32,
    pub modules: Vec<ModuleId>,
    pub watchtower: Vec<WatchtowerId>,
    pub client_profile: ClientProfile,
}

impl Configuration {
    pub fn new(layer: Layer, tier: TierId, locations: u32, client_profile: ClientProfile) -> Self {
        Configuration {
            layer,
            tier,
            locations,
            modules: Vec::new(),
            watchtower: Vec::new(),
            client_profile,
        }
    }

    /// Reject location counts the engine is not defined for.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.locations < 1 {
            return Err(PricingError::InvalidLocations {
                locations: self.locations,
            });
        }
        Ok(())
    }

    // ---- state transitions -------------------------------------------------
    // Each produces a new immutable value; the host store never mutates a
    // configuration in place.

    pub fn with_locations(&self, locations: u32) -> Self {
        Configuration {
            locations,
            ..self.clone()
        }
    }

    pub fn with_tier(&self, layer: Layer, tier: TierId) -> Self {
        Configuration {
            layer,
            tier,
            ..self.clone()
        }
    }

    pub fn with_client_profile(&self, client_profile: ClientProfile) -> Self {
        Configuration {
            client_profile,
            ..self.clone()
        }
    }

    pub fn toggle_module(&self, module: ModuleId) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.modules.iter().position(|m| *m == module) {
            next.modules.remove(pos);
        } else {
            next.modules.push(module);
        }
        next
    }

    pub fn toggle_watchtower(&self, id: WatchtowerId) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.watchtower.iter().position(|w| *w == id) {
            next.watchtower.remove(pos);
        } else {
            next.watchtower.push(id);
        }
        next
    }

    /// Canonical cache key for this configuration.
    ///
    /// Selection order does not affect price, so module and watchtower lists
    /// are sorted and deduplicated before serializing; two configurations
    /// that price identically share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut normalized = self.clone();
        normalized.modules.sort();
        normalized.modules.dedup();
        normalized.watchtower.sort();
        normalized.watchtower.dedup();
        serde_json::to_string(&normalized).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_config() -> Configuration {
        Configuration::new(
            Layer::Core,
            TierId::Pro,
            5,
            ClientProfile::new(ClientType::Growth),
        )
    }

    #[test]
    fn test_validate_rejects_zero_locations() {
        let config = base_config().with_locations(0);
        assert!(matches!(
            config.validate(),
            Err(PricingError::InvalidLocations { locations: 0 })
        ));
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_transitions_do_not_mutate_the_source() {
        let config = base_config();
        let toggled = config.toggle_module(ModuleId::Labor);
        assert!(config.modules.is_empty());
        assert_eq!(toggled.modules, vec![ModuleId::Labor]);

        let untoggled = toggled.toggle_module(ModuleId::Labor);
        assert!(untoggled.modules.is_empty());
    }

    #[test]
    fn test_effective_client_type_franchise_override() {
        let mut profile = ClientProfile::new(ClientType::MultiSite);
        assert_eq!(profile.effective_client_type(), ClientType::MultiSite);
        profile.is_franchise = true;
        assert_eq!(profile.effective_client_type(), ClientType::Franchise);
    }

    #[test]
    fn test_fingerprint_ignores_selection_order() {
        let a = base_config()
            .toggle_module(ModuleId::Labor)
            .toggle_module(ModuleId::Marketing);
        let b = base_config()
            .toggle_module(ModuleId::Marketing)
            .toggle_module(ModuleId::Labor);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_fingerprint_changes_with_price_inputs() {
        let config = base_config();
        assert_ne!(
            config.fingerprint(),
            config.with_locations(6).fingerprint()
        );

        let mut discounted = config.clone();
        discounted.client_profile.custom_discount_percent = Some(dec!(5));
        assert_ne!(config.fingerprint(), discounted.fingerprint());
    }
}
