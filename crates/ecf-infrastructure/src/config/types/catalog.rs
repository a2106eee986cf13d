//! Index and filter service configuration

use std::collections::BTreeMap;

use ecf_domain::value_objects::{AttributeConfig, Options};
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Index service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexServiceConfig {
    /// Index service implementation
    pub index_service_id: String,
    /// Tenant used when none is selected
    pub default_tenant: String,
    /// Index tenants by name
    pub tenants: BTreeMap<String, IndexTenantConfig>,
}

impl Default for IndexServiceConfig {
    fn default() -> Self {
        Self {
            index_service_id: DEFAULT_INDEX_SERVICE_TYPE.to_string(),
            default_tenant: DEFAULT_INDEX_TENANT.to_string(),
            tenants: BTreeMap::new(),
        }
    }
}

/// One index tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexTenantConfig {
    /// Disabled tenants produce no definitions
    pub enabled: bool,
    /// Tenant configuration implementation (required)
    pub config_id: Option<String>,
    /// Options passed to the tenant configuration
    pub config_options: Options,
    /// Worker implementation (required)
    pub worker_id: Option<String>,
    /// Attributes searched in full-text queries
    pub search_attributes: Vec<String>,
    /// Indexed attributes in column order
    pub attributes: Vec<AttributeConfig>,
}

impl Default for IndexTenantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            config_id: None,
            config_options: Options::new(),
            worker_id: None,
            search_attributes: Vec::new(),
            attributes: Vec::new(),
        }
    }
}

/// Filter service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterServiceConfig {
    /// Filter service tenants by name
    pub tenants: BTreeMap<String, FilterTenantConfig>,
}

/// One filter service tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterTenantConfig {
    /// Disabled tenants produce no definitions
    pub enabled: bool,
    /// Filter service implementation
    pub service_id: String,
    /// Filter types by name
    pub filter_types: BTreeMap<String, FilterTypeConfig>,
}

impl Default for FilterTenantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            service_id: DEFAULT_FILTER_SERVICE_TYPE.to_string(),
            filter_types: BTreeMap::new(),
        }
    }
}

/// One filter type of a filter service tenant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterTypeConfig {
    /// Filter type implementation (required)
    pub filter_type_id: Option<String>,
    /// Template identifier (required)
    pub template: Option<String>,
    /// Filter type options, attached only when non-empty
    pub options: Options,
}
