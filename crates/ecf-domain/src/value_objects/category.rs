//! Service role categories
//!
//! Categories are fixed at design time. Each one has a dotted wire name used
//! in rendered service ids, error messages and configuration diagnostics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Value Object: Service Category
///
/// ## Business Rules
///
/// - The set of categories is closed; configuration cannot add new ones
/// - Tenant names are unique within a category only
/// - Locator-publishing categories expose a name-keyed lookup registry,
///   the others only hold a root service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Session/request environment
    #[serde(rename = "environment")]
    Environment,
    /// Per-tenant cart managers
    #[serde(rename = "cart_manager")]
    CartManager,
    /// Per-tenant order managers
    #[serde(rename = "order_manager")]
    OrderManager,
    /// Pricing rule manager
    #[serde(rename = "pricing_manager")]
    PricingManager,
    /// Named price systems
    #[serde(rename = "price_system")]
    PriceSystem,
    /// Named availability systems
    #[serde(rename = "availability_system")]
    AvailabilitySystem,
    /// Checkout manager factories keyed by `(name, tenant)`
    #[serde(rename = "checkout_manager.factory")]
    CheckoutManagerFactory,
    /// Commit order processors keyed by `(name, tenant)`
    #[serde(rename = "checkout_manager.commit_order_processor")]
    CommitOrderProcessor,
    /// Payment manager
    #[serde(rename = "payment_manager")]
    PaymentManager,
    /// Named payment providers
    #[serde(rename = "payment_manager.provider")]
    PaymentProvider,
    /// Index service root and per-tenant workers
    #[serde(rename = "index_service")]
    IndexService,
    /// Per-tenant index configurations
    #[serde(rename = "index_service.config")]
    IndexServiceConfig,
    /// Per-tenant filter services
    #[serde(rename = "filter_service")]
    FilterService,
    /// Voucher service
    #[serde(rename = "voucher_service")]
    VoucherService,
    /// Voucher token manager factory
    #[serde(rename = "voucher_service.token_manager_factory")]
    TokenManagerFactory,
    /// Offer tool
    #[serde(rename = "offer_tool")]
    OfferTool,
    /// Tracking manager with its registered trackers
    #[serde(rename = "tracking_manager")]
    TrackingManager,
}

impl Category {
    /// All categories, in composition order
    pub const ALL: [Category; 17] = [
        Category::Environment,
        Category::CartManager,
        Category::OrderManager,
        Category::PricingManager,
        Category::PriceSystem,
        Category::AvailabilitySystem,
        Category::CommitOrderProcessor,
        Category::CheckoutManagerFactory,
        Category::PaymentManager,
        Category::PaymentProvider,
        Category::IndexService,
        Category::IndexServiceConfig,
        Category::FilterService,
        Category::VoucherService,
        Category::TokenManagerFactory,
        Category::OfferTool,
        Category::TrackingManager,
    ];

    /// Dotted wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Environment => "environment",
            Category::CartManager => "cart_manager",
            Category::OrderManager => "order_manager",
            Category::PricingManager => "pricing_manager",
            Category::PriceSystem => "price_system",
            Category::AvailabilitySystem => "availability_system",
            Category::CheckoutManagerFactory => "checkout_manager.factory",
            Category::CommitOrderProcessor => "checkout_manager.commit_order_processor",
            Category::PaymentManager => "payment_manager",
            Category::PaymentProvider => "payment_manager.provider",
            Category::IndexService => "index_service",
            Category::IndexServiceConfig => "index_service.config",
            Category::FilterService => "filter_service",
            Category::VoucherService => "voucher_service",
            Category::TokenManagerFactory => "voucher_service.token_manager_factory",
            Category::OfferTool => "offer_tool",
            Category::TrackingManager => "tracking_manager",
        }
    }

    /// Whether the category publishes a name-keyed locator
    pub fn publishes_locator(&self) -> bool {
        matches!(
            self,
            Category::CartManager
                | Category::OrderManager
                | Category::PriceSystem
                | Category::AvailabilitySystem
                | Category::CheckoutManagerFactory
                | Category::CommitOrderProcessor
                | Category::PaymentProvider
                | Category::IndexService
                | Category::IndexServiceConfig
                | Category::FilterService
        )
    }

    /// Whether locator keys of this category are `(name, tenant)` pairs
    pub fn uses_checkout_keys(&self) -> bool {
        matches!(
            self,
            Category::CheckoutManagerFactory | Category::CommitOrderProcessor
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown category: {s}")))
    }
}
