use ecf_domain::constants::*;
use ecf_domain::definition::{CrossReference, ServiceDefinition};
use ecf_domain::error::Result;
use ecf_domain::value_objects::{Category, CheckoutKey, ServiceId};
use tracing::debug;

use super::CategoryRegistrar;
use crate::config::{CheckoutManagerConfig, PaymentManagerConfig};
use crate::di::definitions::Registration;
use crate::di::resolver::{resolve_optional, resolve_reference};
use crate::di::validation::{require_field, select_payment_profile};

/// Registers a commit order processor and a checkout manager factory per
/// `(name, tenant)` pair
///
/// Both services of a pair share one order manager, defaulting to the
/// tenant of the same name. The factory receives the registered processor,
/// so looking up either one yields the same processor instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckoutManagerRegistrar;

impl CategoryRegistrar for CheckoutManagerRegistrar {
    type Config = CheckoutManagerConfig;

    fn category(&self) -> Category {
        Category::CheckoutManagerFactory
    }

    fn register(&self, config: &CheckoutManagerConfig) -> Result<Registration> {
        let mut registration = Registration::new();

        for (name, flow) in &config.by_name {
            for (tenant, tenant_config) in &flow.tenants {
                let key = CheckoutKey::new(name.as_str(), tenant.as_str());
                let entry = key.to_string();

                let factory_id = require_field(
                    Category::CheckoutManagerFactory,
                    &entry,
                    "factory_id",
                    Some(tenant_config.factory_id.as_str()),
                )?;
                let processor_id = require_field(
                    Category::CommitOrderProcessor,
                    &entry,
                    "commit_order_processor.id",
                    Some(tenant_config.commit_order_processor.id.as_str()),
                )?;

                for (index, step) in tenant_config.steps.iter().enumerate() {
                    require_field(
                        Category::CheckoutManagerFactory,
                        &entry,
                        &format!("steps[{index}].name"),
                        Some(step.name.as_str()),
                    )?;
                }

                let order_manager = resolve_reference(
                    Category::OrderManager,
                    tenant_config.order_manager_tenant.as_deref(),
                    tenant,
                );
                let processor_ref = ServiceId::checkout(Category::CommitOrderProcessor, key.clone());

                let processor = ServiceDefinition::new(processor_id)
                    .with_argument(ARG_ORDER_MANAGER, order_manager.clone());

                let mut factory = ServiceDefinition::new(factory_id)
                    .with_argument(ARG_ORDER_MANAGER, order_manager)
                    .with_argument(ARG_COMMIT_ORDER_PROCESSOR, CrossReference::new(processor_ref.clone()))
                    .with_literal(ARG_CHECKOUT_STEP_DEFINITIONS, &tenant_config.steps)?
                    .with_literal(ARG_OPTIONS, &tenant_config.factory_options)?;

                match resolve_optional(
                    Category::PaymentProvider,
                    tenant_config.payment.provider.as_deref(),
                ) {
                    Some(provider) => factory.set_argument(ARG_PAYMENT_PROVIDER, provider),
                    None => debug!(checkout = %entry, "No payment provider wired"),
                }

                registration.define(processor_ref, processor);
                registration.define(
                    ServiceId::checkout(Category::CheckoutManagerFactory, key),
                    factory,
                );
            }
        }

        Ok(registration)
    }
}

/// Registers the payment manager alias and one definition per provider
///
/// Each provider must select a profile it defines; the selected profile
/// becomes the provider's `options` unless it is empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentManagerRegistrar;

impl CategoryRegistrar for PaymentManagerRegistrar {
    type Config = PaymentManagerConfig;

    fn category(&self) -> Category {
        Category::PaymentProvider
    }

    fn register(&self, config: &PaymentManagerConfig) -> Result<Registration> {
        let payment_manager_id = require_field(
            Category::PaymentManager,
            Category::PaymentManager.as_str(),
            "payment_manager_id",
            Some(config.payment_manager_id.as_str()),
        )?;

        let mut registration = Registration::new();
        registration.define(
            ServiceId::root(Category::PaymentManager),
            ServiceDefinition::alias(payment_manager_id),
        );

        for (name, provider_config) in &config.providers {
            let profile = select_payment_profile(name, provider_config)?;
            let provider_id = require_field(
                Category::PaymentProvider,
                name,
                "provider_id",
                provider_config.provider_id.as_deref(),
            )?;

            let mut provider = ServiceDefinition::new(provider_id);
            if !profile.is_empty() {
                provider = provider.with_literal(ARG_OPTIONS, profile)?;
            }
            registration.define(ServiceId::named(Category::PaymentProvider, name.as_str()), provider);
        }

        Ok(registration)
    }
}
