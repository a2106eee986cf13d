//! E-commerce configuration root and the core commerce sections
//!
//! Every section derives `Default` so an empty `[ecommerce]` table composes
//! into a graph of root services with default implementations and empty
//! locators. Maps are ordered so iteration, and therefore composition, is
//! deterministic.

use std::collections::BTreeMap;

use ecf_domain::value_objects::Options;
use serde::{Deserialize, Serialize};

use super::catalog::{FilterServiceConfig, IndexServiceConfig};
use super::checkout::{CheckoutManagerConfig, PaymentManagerConfig};
use super::marketing::{OfferToolConfig, TrackingManagerConfig, VoucherServiceConfig};
use crate::constants::*;

/// The full e-commerce configuration tree, one field per category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcommerceConfig {
    /// `[ecommerce.environment]`
    pub environment: EnvironmentConfig,
    /// `[ecommerce.cart_manager]`
    pub cart_manager: CartManagerConfig,
    /// `[ecommerce.order_manager]`
    pub order_manager: OrderManagerConfig,
    /// `[ecommerce.pricing_manager]`
    pub pricing_manager: PricingManagerConfig,
    /// `[ecommerce.price_systems.<name>]`
    pub price_systems: BTreeMap<String, SystemConfig>,
    /// `[ecommerce.availability_systems.<name>]`
    pub availability_systems: BTreeMap<String, SystemConfig>,
    /// `[ecommerce.checkout_manager]`
    pub checkout_manager: CheckoutManagerConfig,
    /// `[ecommerce.payment_manager]`
    pub payment_manager: PaymentManagerConfig,
    /// `[ecommerce.index_service]`
    pub index_service: IndexServiceConfig,
    /// `[ecommerce.filter_service]`
    pub filter_service: FilterServiceConfig,
    /// `[ecommerce.voucher_service]`
    pub voucher_service: VoucherServiceConfig,
    /// `[ecommerce.offer_tool]`
    pub offer_tool: OfferToolConfig,
    /// `[ecommerce.tracking_manager]`
    pub tracking_manager: TrackingManagerConfig,
    /// `[ecommerce.bricks.<id>]` area brick states
    pub bricks: BTreeMap<String, BrickConfig>,
}

// ============================================================================
// Environment
// ============================================================================

/// Environment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Environment implementation
    pub environment_id: String,
    /// Options passed to the environment and published as a parameter
    pub options: Options,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment_id: DEFAULT_ENVIRONMENT_TYPE.to_string(),
            options: Options::new(),
        }
    }
}

// ============================================================================
// Cart manager
// ============================================================================

/// Cart manager configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartManagerConfig {
    /// Cart manager tenants by name
    pub tenants: BTreeMap<String, CartManagerTenantConfig>,
}

/// One cart manager tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartManagerTenantConfig {
    /// Cart manager implementation
    pub cart_manager_id: String,
    /// Cart factory
    pub cart: CartFactoryConfig,
    /// Cart price calculator factory
    pub price_calculator: PriceCalculatorConfig,
    /// Order manager tenant, defaults to this tenant's name
    pub order_manager_tenant: Option<String>,
}

impl Default for CartManagerTenantConfig {
    fn default() -> Self {
        Self {
            cart_manager_id: DEFAULT_CART_MANAGER_TYPE.to_string(),
            cart: CartFactoryConfig::default(),
            price_calculator: PriceCalculatorConfig::default(),
            order_manager_tenant: None,
        }
    }
}

/// Cart factory of a cart manager tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartFactoryConfig {
    /// Cart factory implementation
    pub factory_id: String,
    /// Options passed to the factory
    pub factory_options: Options,
}

impl Default for CartFactoryConfig {
    fn default() -> Self {
        Self {
            factory_id: DEFAULT_CART_FACTORY_TYPE.to_string(),
            factory_options: Options::new(),
        }
    }
}

/// Price calculator factory of a cart manager tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceCalculatorConfig {
    /// Price calculator factory implementation
    pub factory_id: String,
    /// Price modificators, applied in order
    pub modificators: Vec<ModificatorConfig>,
    /// Options passed to the factory
    pub factory_options: Options,
}

impl Default for PriceCalculatorConfig {
    fn default() -> Self {
        Self {
            factory_id: DEFAULT_PRICE_CALCULATOR_FACTORY_TYPE.to_string(),
            modificators: Vec::new(),
            factory_options: Options::new(),
        }
    }
}

/// One price modificator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModificatorConfig {
    /// Modificator implementation
    pub class: String,
    /// Modificator options
    pub options: Options,
}

// ============================================================================
// Order manager
// ============================================================================

/// Order manager configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderManagerConfig {
    /// Order manager tenants by name
    pub tenants: BTreeMap<String, OrderManagerTenantConfig>,
}

/// One order manager tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderManagerTenantConfig {
    /// Order manager implementation
    pub order_manager_id: String,
    /// Options passed to the order manager
    pub options: Options,
    /// Order agent factory
    pub order_agent: OrderAgentConfig,
}

impl Default for OrderManagerTenantConfig {
    fn default() -> Self {
        Self {
            order_manager_id: DEFAULT_ORDER_MANAGER_TYPE.to_string(),
            options: Options::new(),
            order_agent: OrderAgentConfig::default(),
        }
    }
}

/// Order agent factory of an order manager tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAgentConfig {
    /// Order agent factory implementation
    pub factory_id: String,
    /// Options passed to the factory
    pub factory_options: Options,
}

impl Default for OrderAgentConfig {
    fn default() -> Self {
        Self {
            factory_id: DEFAULT_ORDER_AGENT_FACTORY_TYPE.to_string(),
            factory_options: Options::new(),
        }
    }
}

// ============================================================================
// Pricing manager and systems
// ============================================================================

/// Pricing manager configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingManagerConfig {
    /// Whether pricing rules are applied
    pub enabled: bool,
    /// Pricing manager implementation
    pub pricing_manager_id: String,
    /// Options published for the pricing manager
    pub pricing_manager_options: Options,
    /// Condition name to implementation mapping
    pub conditions: BTreeMap<String, String>,
    /// Action name to implementation mapping
    pub actions: BTreeMap<String, String>,
}

impl Default for PricingManagerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pricing_manager_id: DEFAULT_PRICING_MANAGER_TYPE.to_string(),
            pricing_manager_options: Options::new(),
            conditions: BTreeMap::new(),
            actions: BTreeMap::new(),
        }
    }
}

/// A named price or availability system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Implementation the system name aliases (required)
    pub id: Option<String>,
}

// ============================================================================
// Area bricks
// ============================================================================

/// State of one area brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    /// Whether the brick is enabled
    pub enabled: bool,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
