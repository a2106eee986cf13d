//! Checkout and payment configuration

use std::collections::BTreeMap;

use ecf_domain::value_objects::Options;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Checkout manager configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutManagerConfig {
    /// Checkout flows by name
    pub by_name: BTreeMap<String, CheckoutFlowConfig>,
}

/// One named checkout flow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutFlowConfig {
    /// Tenant variants of the flow
    pub tenants: BTreeMap<String, CheckoutTenantConfig>,
}

/// One tenant variant of a checkout flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutTenantConfig {
    /// Checkout manager factory implementation
    pub factory_id: String,
    /// Options passed to the factory
    pub factory_options: Options,
    /// Order manager tenant, defaults to this tenant's name
    pub order_manager_tenant: Option<String>,
    /// Commit order processor
    pub commit_order_processor: CommitOrderProcessorConfig,
    /// Checkout steps in flow order, passed through verbatim
    pub steps: Vec<CheckoutStepConfig>,
    /// Payment wiring
    pub payment: CheckoutPaymentConfig,
}

impl Default for CheckoutTenantConfig {
    fn default() -> Self {
        Self {
            factory_id: DEFAULT_CHECKOUT_MANAGER_FACTORY_TYPE.to_string(),
            factory_options: Options::new(),
            order_manager_tenant: None,
            commit_order_processor: CommitOrderProcessorConfig::default(),
            steps: Vec::new(),
            payment: CheckoutPaymentConfig::default(),
        }
    }
}

/// Commit order processor of a checkout tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitOrderProcessorConfig {
    /// Commit order processor implementation
    pub id: String,
}

impl Default for CommitOrderProcessorConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_COMMIT_ORDER_PROCESSOR_TYPE.to_string(),
        }
    }
}

/// One checkout step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutStepConfig {
    /// Step name (required)
    pub name: String,
    /// Step implementation
    pub class: Option<String>,
    /// Step options
    pub options: Options,
}

/// Payment wiring of a checkout tenant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutPaymentConfig {
    /// Payment provider name; no payment step is wired when absent
    pub provider: Option<String>,
}

/// Payment manager configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentManagerConfig {
    /// Payment manager implementation
    pub payment_manager_id: String,
    /// Payment providers by name
    pub providers: BTreeMap<String, PaymentProviderConfig>,
}

impl Default for PaymentManagerConfig {
    fn default() -> Self {
        Self {
            payment_manager_id: DEFAULT_PAYMENT_MANAGER_TYPE.to_string(),
            providers: BTreeMap::new(),
        }
    }
}

/// One payment provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentProviderConfig {
    /// Provider implementation (required)
    pub provider_id: Option<String>,
    /// Selected profile (required)
    pub profile: Option<String>,
    /// Parameter bundles by profile name
    pub profiles: BTreeMap<String, Options>,
}
