//! Request DTOs for pricing API endpoints.
//!
//! Wire ids are plain strings; this is the boundary where they become typed
//! catalog ids, so an unrecognized id is rejected here with an explicit
//! error instead of reaching the calculators.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::catalog::{ClientType, Layer, ModuleId, TierId, WatchtowerId};
use crate::pricing::{ClientProfile, Configuration, PricingError};

/// A full configuration as submitted by the host UI.
#[derive(Debug, Deserialize)]
pub struct ConfigurationRequest {
    pub layer: String,
    pub tier: String,
    pub locations: u32,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub watchtower: Vec<String>,
    pub client_profile: ClientProfileRequest,
}

/// Client profile fields as submitted by the host UI.
#[derive(Debug, Deserialize)]
pub struct ClientProfileRequest {
    #[serde(rename = "type")]
    pub client_type: String,
    #[serde(default)]
    pub is_early_adopter: bool,
    #[serde(default)]
    pub is_franchise: bool,
    #[serde(default = "default_brand_count")]
    pub brand_count: u32,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub custom_discount_percent: Option<Decimal>,
}

fn default_brand_count() -> u32 {
    1
}

impl ConfigurationRequest {
    /// Parse into a typed [`Configuration`], rejecting unknown ids and
    /// invalid location counts.
    pub fn into_configuration(self) -> Result<Configuration, PricingError> {
        let layer = Layer::parse(&self.layer)?;
        let tier = TierId::parse(&self.tier)?;

        let modules = self
            .modules
            .iter()
            .map(|id| ModuleId::parse(id))
            .collect::<Result<Vec<_>, _>>()?;
        let watchtower = self
            .watchtower
            .iter()
            .map(|id| WatchtowerId::parse(id))
            .collect::<Result<Vec<_>, _>>()?;

        let config = Configuration {
            layer,
            tier,
            locations: self.locations,
            modules,
            watchtower,
            client_profile: ClientProfile {
                client_type: ClientType::parse(&self.client_profile.client_type)?,
                is_early_adopter: self.client_profile.is_early_adopter,
                is_franchise: self.client_profile.is_franchise,
                brand_count: self.client_profile.brand_count,
                custom_discount_percent: self.client_profile.custom_discount_percent,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

/// Request for the standalone enterprise model comparison.
#[derive(Debug, Deserialize)]
pub struct EnterpriseQuoteRequest {
    pub locations: u32,
    #[serde(default = "default_brand_count")]
    pub brand_count: u32,
}
