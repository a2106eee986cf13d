//! Composition Engine
//!
//! The single entry point turning an [`EcommerceConfig`] into published
//! [`ServiceLocators`]. Registrars run in a fixed order so that no category
//! depends on one registered after it:
//!
//! ```text
//! environment → cart_manager → order_manager → pricing_manager
//!   → price_systems → availability_systems → checkout_manager
//!   → payment_manager → index_service → filter_service
//!   → voucher_service → offer_tool → tracking_manager
//! ```
//!
//! Any failure aborts the whole composition; nothing is published.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ecf_application::ConstructorRegistry;
use ecf_domain::error::Result;
use ecf_domain::ports::{AttributeFactory, BrickManager};
use tracing::{info, warn};

use super::container::ServiceContainer;
use super::definitions::DefinitionSet;
use super::locators::ServiceLocators;
use super::registrars::*;
use super::validation::{detect_cycles, validate_bricks, validate_references, verify_service_types};
use crate::config::{BrickConfig, CompositionSettings, EcommerceConfig};
use crate::infrastructure::DefaultAttributeFactory;
use crate::logging::log_registrar_pass;

/// Builds validated service graphs from configuration
pub struct CompositionEngine {
    constructors: ConstructorRegistry,
    attribute_factory: Arc<dyn AttributeFactory>,
    brick_manager: Option<Arc<dyn BrickManager>>,
    settings: CompositionSettings,
}

impl CompositionEngine {
    /// Create an engine building services with `constructors`
    pub fn new(constructors: ConstructorRegistry) -> Self {
        Self {
            constructors,
            attribute_factory: Arc::new(DefaultAttributeFactory),
            brick_manager: None,
            settings: CompositionSettings::default(),
        }
    }

    /// Use a custom attribute factory for index tenants
    pub fn with_attribute_factory(mut self, attribute_factory: Arc<dyn AttributeFactory>) -> Self {
        self.attribute_factory = attribute_factory;
        self
    }

    /// Apply configured brick states to this brick manager
    pub fn with_brick_manager(mut self, brick_manager: Arc<dyn BrickManager>) -> Self {
        self.brick_manager = Some(brick_manager);
        self
    }

    /// Override composition settings
    pub fn with_settings(mut self, settings: CompositionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Compose the service graph
    ///
    /// Runs every registrar, validates the resulting definitions, publishes
    /// the locators and finally applies brick states. No service is
    /// constructed here.
    pub fn compose(&self, config: &EcommerceConfig) -> Result<ServiceLocators> {
        info!("Composing e-commerce services");

        let definitions = self.define(config)?;

        if let Some(manager) = &self.brick_manager {
            validate_bricks(manager.as_ref(), &config.bricks)?;
        }

        let container = Arc::new(ServiceContainer::new(definitions, self.constructors.clone()));
        let locators = ServiceLocators::new(container);

        self.apply_brick_states(&config.bricks)?;

        info!(
            definitions = locators.definitions().len(),
            parameters = locators.parameters().len(),
            "E-commerce services composed"
        );
        Ok(locators)
    }

    /// Register and validate all definitions without publishing them
    pub fn define(&self, config: &EcommerceConfig) -> Result<DefinitionSet> {
        let mut definitions = DefinitionSet::new();

        self.run(&mut definitions, &EnvironmentRegistrar, &config.environment)?;
        self.run(&mut definitions, &CartManagerRegistrar, &config.cart_manager)?;
        self.run(&mut definitions, &OrderManagerRegistrar, &config.order_manager)?;
        self.run(&mut definitions, &PricingManagerRegistrar, &config.pricing_manager)?;
        self.run(&mut definitions, &SystemRegistrar::price_systems(), &config.price_systems)?;
        self.run(
            &mut definitions,
            &SystemRegistrar::availability_systems(),
            &config.availability_systems,
        )?;
        self.run(&mut definitions, &CheckoutManagerRegistrar, &config.checkout_manager)?;
        self.run(&mut definitions, &PaymentManagerRegistrar, &config.payment_manager)?;
        self.run(
            &mut definitions,
            &IndexServiceRegistrar::new(Arc::clone(&self.attribute_factory)),
            &config.index_service,
        )?;
        self.run(&mut definitions, &FilterServiceRegistrar, &config.filter_service)?;
        self.run(&mut definitions, &VoucherServiceRegistrar, &config.voucher_service)?;
        self.run(&mut definitions, &OfferToolRegistrar, &config.offer_tool)?;
        self.run(&mut definitions, &TrackingManagerRegistrar, &config.tracking_manager)?;

        validate_references(&definitions)?;
        detect_cycles(&definitions)?;
        if self.settings.verify_service_types {
            verify_service_types(&definitions, &self.constructors)?;
        }

        Ok(definitions)
    }

    fn run<R: CategoryRegistrar>(
        &self,
        definitions: &mut DefinitionSet,
        registrar: &R,
        config: &R::Config,
    ) -> Result<()> {
        let registration = registrar.register(config)?;
        log_registrar_pass(registrar.category(), registration.len(), registration.skipped());
        definitions.merge(registration)
    }

    /// Apply configured brick states
    ///
    /// All or nothing: when a state change fails, bricks already switched
    /// are restored to their previous state before the error is returned.
    fn apply_brick_states(&self, bricks: &BTreeMap<String, BrickConfig>) -> Result<()> {
        let Some(manager) = &self.brick_manager else {
            if !bricks.is_empty() {
                warn!(count = bricks.len(), "Brick states configured without a brick manager, ignoring");
            }
            return Ok(());
        };

        let mut applied: Vec<(&str, bool)> = Vec::with_capacity(bricks.len());
        for (id, brick) in bricks {
            let outcome = manager.is_enabled(id).and_then(|previous| {
                set_brick_state(manager.as_ref(), id, brick.enabled).map(|()| previous)
            });
            match outcome {
                Ok(previous) => applied.push((id.as_str(), previous)),
                Err(err) => {
                    for (applied_id, previous) in applied.into_iter().rev() {
                        if let Err(restore_err) = set_brick_state(manager.as_ref(), applied_id, previous) {
                            warn!(brick = applied_id, error = %restore_err, "Failed to restore brick state");
                        }
                    }
                    return Err(err);
                }
            }
        }
        info!(count = bricks.len(), "Brick states applied");
        Ok(())
    }
}

fn set_brick_state(manager: &dyn BrickManager, id: &str, enabled: bool) -> Result<()> {
    if enabled {
        manager.enable(id)
    } else {
        manager.disable(id)
    }
}

impl fmt::Debug for CompositionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionEngine")
            .field("constructors", &self.constructors)
            .field("brick_manager", &self.brick_manager.is_some())
            .field("settings", &self.settings)
            .finish()
    }
}
