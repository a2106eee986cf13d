use std::collections::BTreeMap;

use ecf_domain::constants::*;
use ecf_domain::definition::ServiceDefinition;
use ecf_domain::error::{Error, Result};
use ecf_domain::value_objects::{Category, ServiceId};

use super::CategoryRegistrar;
use crate::config::{PricingManagerConfig, SystemConfig};
use crate::di::definitions::Registration;
use crate::di::validation::require_field;

/// Registers the pricing manager alias and publishes its rule mappings
#[derive(Debug, Default, Clone, Copy)]
pub struct PricingManagerRegistrar;

impl CategoryRegistrar for PricingManagerRegistrar {
    type Config = PricingManagerConfig;

    fn category(&self) -> Category {
        Category::PricingManager
    }

    fn register(&self, config: &PricingManagerConfig) -> Result<Registration> {
        let category = self.category();
        let pricing_manager_id = require_field(
            category,
            category.as_str(),
            "pricing_manager_id",
            Some(config.pricing_manager_id.as_str()),
        )?;

        let mut registration = Registration::new();
        registration.define(
            ServiceId::root(category),
            ServiceDefinition::alias(pricing_manager_id),
        );
        registration.set_parameter(PARAM_PRICING_ENABLED, &config.enabled)?;
        registration.set_parameter(PARAM_PRICING_CONDITION_MAPPING, &config.conditions)?;
        registration.set_parameter(PARAM_PRICING_ACTION_MAPPING, &config.actions)?;
        registration.set_parameter(PARAM_PRICING_OPTIONS, &config.pricing_manager_options)?;
        Ok(registration)
    }
}

/// Registers named price or availability systems as plain aliases
#[derive(Debug, Clone, Copy)]
pub struct SystemRegistrar {
    category: Category,
}

impl SystemRegistrar {
    /// Registrar for the given system category
    ///
    /// # Errors
    /// `InvalidArgument` for categories other than price and availability systems.
    pub fn new(category: Category) -> Result<Self> {
        match category {
            Category::PriceSystem | Category::AvailabilitySystem => Ok(Self { category }),
            other => Err(Error::invalid_argument(format!(
                "{other} is not a system category"
            ))),
        }
    }

    /// Price system registrar
    pub fn price_systems() -> Self {
        Self {
            category: Category::PriceSystem,
        }
    }

    /// Availability system registrar
    pub fn availability_systems() -> Self {
        Self {
            category: Category::AvailabilitySystem,
        }
    }
}

impl CategoryRegistrar for SystemRegistrar {
    type Config = BTreeMap<String, SystemConfig>;

    fn category(&self) -> Category {
        self.category
    }

    fn register(&self, config: &BTreeMap<String, SystemConfig>) -> Result<Registration> {
        let mut registration = Registration::new();
        for (name, system) in config {
            let id = require_field(self.category, name, "id", system.id.as_deref())?;
            registration.define(
                ServiceId::named(self.category, name.as_str()),
                ServiceDefinition::alias(id),
            );
        }
        Ok(registration)
    }
}
