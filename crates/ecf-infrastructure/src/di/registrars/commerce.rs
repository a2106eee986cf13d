use ecf_domain::constants::*;
use ecf_domain::definition::ServiceDefinition;
use ecf_domain::error::Result;
use ecf_domain::value_objects::{Category, ServiceId};
use tracing::debug;

use super::CategoryRegistrar;
use crate::config::{CartManagerConfig, EnvironmentConfig, OrderManagerConfig};
use crate::di::definitions::Registration;
use crate::di::resolver::resolve_reference;
use crate::di::validation::require_field;

/// Registers the environment root service and publishes its options
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvironmentRegistrar;

impl CategoryRegistrar for EnvironmentRegistrar {
    type Config = EnvironmentConfig;

    fn category(&self) -> Category {
        Category::Environment
    }

    fn register(&self, config: &EnvironmentConfig) -> Result<Registration> {
        let category = self.category();
        let environment_id = require_field(
            category,
            category.as_str(),
            "environment_id",
            Some(config.environment_id.as_str()),
        )?;

        let mut registration = Registration::new();
        registration.define(
            ServiceId::root(category),
            ServiceDefinition::new(environment_id).with_literal(ARG_OPTIONS, &config.options)?,
        );
        registration.set_parameter(PARAM_ENVIRONMENT_OPTIONS, &config.options)?;
        Ok(registration)
    }
}

/// Registers one cart manager per tenant
///
/// The cart factory and price calculator factory are private to their
/// cart manager. The order manager is shared and defaults to the tenant of
/// the same name.
#[derive(Debug, Default, Clone, Copy)]
pub struct CartManagerRegistrar;

impl CategoryRegistrar for CartManagerRegistrar {
    type Config = CartManagerConfig;

    fn category(&self) -> Category {
        Category::CartManager
    }

    fn register(&self, config: &CartManagerConfig) -> Result<Registration> {
        let category = self.category();
        let mut registration = Registration::new();

        for (tenant, tenant_config) in &config.tenants {
            let cart_manager_id = require_field(
                category,
                tenant,
                "cart_manager_id",
                Some(tenant_config.cart_manager_id.as_str()),
            )?;
            let cart_factory_id = require_field(
                category,
                tenant,
                "cart.factory_id",
                Some(tenant_config.cart.factory_id.as_str()),
            )?;
            let calculator = &tenant_config.price_calculator;
            let calculator_factory_id = require_field(
                category,
                tenant,
                "price_calculator.factory_id",
                Some(calculator.factory_id.as_str()),
            )?;

            let cart_factory = ServiceDefinition::new(cart_factory_id)
                .with_literal(ARG_OPTIONS, &tenant_config.cart.factory_options)?;
            let price_calculator_factory = ServiceDefinition::new(calculator_factory_id)
                .with_literal(ARG_MODIFICATOR_CONFIG, &calculator.modificators)?
                .with_literal(ARG_OPTIONS, &calculator.factory_options)?;
            let order_manager = resolve_reference(
                Category::OrderManager,
                tenant_config.order_manager_tenant.as_deref(),
                tenant,
            );

            debug!(tenant = %tenant, order_manager = %order_manager.target(), "Cart manager wired");
            registration.define(
                ServiceId::named(category, tenant.as_str()),
                ServiceDefinition::new(cart_manager_id)
                    .with_argument(ARG_CART_FACTORY, cart_factory)
                    .with_argument(ARG_PRICE_CALCULATOR_FACTORY, price_calculator_factory)
                    .with_argument(ARG_ORDER_MANAGER, order_manager),
            );
        }

        Ok(registration)
    }
}

/// Registers one order manager per tenant, each with a private order agent factory
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderManagerRegistrar;

impl CategoryRegistrar for OrderManagerRegistrar {
    type Config = OrderManagerConfig;

    fn category(&self) -> Category {
        Category::OrderManager
    }

    fn register(&self, config: &OrderManagerConfig) -> Result<Registration> {
        let category = self.category();
        let mut registration = Registration::new();

        for (tenant, tenant_config) in &config.tenants {
            let order_manager_id = require_field(
                category,
                tenant,
                "order_manager_id",
                Some(tenant_config.order_manager_id.as_str()),
            )?;
            let agent_factory_id = require_field(
                category,
                tenant,
                "order_agent.factory_id",
                Some(tenant_config.order_agent.factory_id.as_str()),
            )?;

            let order_agent_factory = ServiceDefinition::new(agent_factory_id)
                .with_literal(ARG_OPTIONS, &tenant_config.order_agent.factory_options)?;

            registration.define(
                ServiceId::named(category, tenant.as_str()),
                ServiceDefinition::new(order_manager_id)
                    .with_argument(ARG_ORDER_AGENT_FACTORY, order_agent_factory)
                    .with_literal(ARG_OPTIONS, &tenant_config.options)?,
            );
        }

        Ok(registration)
    }
}
