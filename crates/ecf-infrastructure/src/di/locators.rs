//! Composition result
//!
//! [`ServiceLocators`] is what the rest of the platform receives: one typed
//! locator per locator-publishing category, the root services, published
//! parameters and tag-based discovery. It is passed explicitly to whatever
//! needs it; there is no ambient global lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use ecf_domain::constants::{TAG_ATTRIBUTE_TENANT, TAG_INDEX_WORKER};
use ecf_domain::error::Result;
use ecf_domain::ports::Service;
use ecf_domain::value_objects::{Category, CheckoutKey, ServiceId, ServiceKey};
use serde::de::DeserializeOwned;

use super::container::ServiceContainer;
use super::definitions::DefinitionSet;
use super::locator::Locator;
use crate::error_ext::OptionExt;

/// Published per-category locators and root services
#[derive(Debug, Clone)]
pub struct ServiceLocators {
    container: Arc<ServiceContainer>,

    // ========================================================================
    // Tenant-keyed locators
    // ========================================================================
    cart_managers: Locator,
    order_managers: Locator,
    price_systems: Locator,
    availability_systems: Locator,
    payment_providers: Locator,
    index_tenants: Locator,
    index_configs: Locator,
    filter_services: Locator,

    // ========================================================================
    // Checkout locators, keyed by (name, tenant)
    // ========================================================================
    checkout_manager_factories: Locator<CheckoutKey>,
    commit_order_processors: Locator<CheckoutKey>,
}

impl ServiceLocators {
    /// Publish the locators of a composed container
    pub fn new(container: Arc<ServiceContainer>) -> Self {
        let locator = |category| Locator::build(category, Arc::clone(&container));
        Self {
            cart_managers: locator(Category::CartManager),
            order_managers: locator(Category::OrderManager),
            price_systems: locator(Category::PriceSystem),
            availability_systems: locator(Category::AvailabilitySystem),
            payment_providers: locator(Category::PaymentProvider),
            index_tenants: locator(Category::IndexService),
            index_configs: locator(Category::IndexServiceConfig),
            filter_services: locator(Category::FilterService),
            checkout_manager_factories: Locator::build(
                Category::CheckoutManagerFactory,
                Arc::clone(&container),
            ),
            commit_order_processors: Locator::build(
                Category::CommitOrderProcessor,
                Arc::clone(&container),
            ),
            container,
        }
    }

    // ========================================================================
    // Locators
    // ========================================================================

    /// Cart managers by tenant
    pub fn cart_managers(&self) -> &Locator {
        &self.cart_managers
    }

    /// Order managers by tenant
    pub fn order_managers(&self) -> &Locator {
        &self.order_managers
    }

    /// Price systems by name
    pub fn price_systems(&self) -> &Locator {
        &self.price_systems
    }

    /// Availability systems by name
    pub fn availability_systems(&self) -> &Locator {
        &self.availability_systems
    }

    /// Checkout manager factories by `(name, tenant)`
    pub fn checkout_manager_factories(&self) -> &Locator<CheckoutKey> {
        &self.checkout_manager_factories
    }

    /// Commit order processors by `(name, tenant)`
    pub fn commit_order_processors(&self) -> &Locator<CheckoutKey> {
        &self.commit_order_processors
    }

    /// Payment providers by name
    pub fn payment_providers(&self) -> &Locator {
        &self.payment_providers
    }

    /// Index workers by tenant
    pub fn index_tenants(&self) -> &Locator {
        &self.index_tenants
    }

    /// Index tenant configurations by tenant
    pub fn index_configs(&self) -> &Locator {
        &self.index_configs
    }

    /// Filter services by tenant
    pub fn filter_services(&self) -> &Locator {
        &self.filter_services
    }

    // ========================================================================
    // Root services
    // ========================================================================

    /// Environment
    pub fn environment(&self) -> Result<Arc<dyn Service>> {
        self.root(Category::Environment)
    }

    /// Pricing manager
    pub fn pricing_manager(&self) -> Result<Arc<dyn Service>> {
        self.root(Category::PricingManager)
    }

    /// Payment manager
    pub fn payment_manager(&self) -> Result<Arc<dyn Service>> {
        self.root(Category::PaymentManager)
    }

    /// Index service
    pub fn index_service(&self) -> Result<Arc<dyn Service>> {
        self.root(Category::IndexService)
    }

    /// Voucher service
    pub fn voucher_service(&self) -> Result<Arc<dyn Service>> {
        self.root(Category::VoucherService)
    }

    /// Voucher token manager factory
    pub fn token_manager_factory(&self) -> Result<Arc<dyn Service>> {
        self.root(Category::TokenManagerFactory)
    }

    /// Offer tool
    pub fn offer_tool(&self) -> Result<Arc<dyn Service>> {
        self.root(Category::OfferTool)
    }

    /// Tracking manager with all enabled trackers registered
    pub fn tracking_manager(&self) -> Result<Arc<dyn Service>> {
        self.root(Category::TrackingManager)
    }

    fn root(&self, category: Category) -> Result<Arc<dyn Service>> {
        self.container.get(&ServiceId::root(category))
    }

    // ========================================================================
    // Parameters and discovery
    // ========================================================================

    /// Published parameter by key
    pub fn parameter(&self, key: &str) -> Option<&serde_json::Value> {
        self.container.definitions().parameter(key)
    }

    /// Published parameter deserialized into `T`
    pub fn parameter_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .parameter(key)
            .ok_or_not_found(format!("parameter \"{key}\""))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// All published parameters
    pub fn parameters(&self) -> &BTreeMap<String, serde_json::Value> {
        self.container.definitions().parameters()
    }

    /// Index workers discovered through their tag, as `(tenant, id)` pairs
    pub fn index_workers(&self) -> Vec<(String, ServiceId)> {
        self.container
            .definitions()
            .find_tagged(TAG_INDEX_WORKER)
            .into_iter()
            .filter_map(|(id, tag)| {
                tag.attribute(TAG_ATTRIBUTE_TENANT)
                    .map(|tenant| (tenant.to_string(), id.clone()))
            })
            .collect()
    }

    /// Locator keys of a category, rendered and sorted
    ///
    /// Empty for categories that only hold a root service.
    pub fn names(&self, category: Category) -> Vec<String> {
        if !category.publishes_locator() {
            return Vec::new();
        }
        self.container
            .definitions()
            .ids_in(category)
            .filter(|id| id.key != ServiceKey::Root)
            .map(|id| id.key.to_string())
            .collect()
    }

    /// Service by id, for callers that work with rendered ids
    pub fn service(&self, id: &ServiceId) -> Result<Arc<dyn Service>> {
        self.container.get(id)
    }

    /// All registered definitions and parameters
    pub fn definitions(&self) -> &DefinitionSet {
        self.container.definitions()
    }

    /// Underlying container
    pub fn container(&self) -> &Arc<ServiceContainer> {
        &self.container
    }
}
