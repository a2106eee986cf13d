//! Voucher, offer and tracking configuration

use std::collections::BTreeMap;

use ecf_domain::value_objects::Options;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Voucher service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoucherServiceConfig {
    /// Voucher service implementation
    pub voucher_service_id: String,
    /// Options passed to the voucher service
    pub voucher_service_options: Options,
    /// Token managers
    pub token_managers: TokenManagersConfig,
}

impl Default for VoucherServiceConfig {
    fn default() -> Self {
        Self {
            voucher_service_id: DEFAULT_VOUCHER_SERVICE_TYPE.to_string(),
            voucher_service_options: Options::new(),
            token_managers: TokenManagersConfig::default(),
        }
    }
}

/// Voucher token managers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenManagersConfig {
    /// Token manager factory implementation
    pub factory_id: String,
    /// Token type name to implementation mapping
    pub mapping: BTreeMap<String, String>,
}

impl Default for TokenManagersConfig {
    fn default() -> Self {
        Self {
            factory_id: DEFAULT_TOKEN_MANAGER_FACTORY_TYPE.to_string(),
            mapping: BTreeMap::new(),
        }
    }
}

/// Offer tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferToolConfig {
    /// Offer tool implementation
    pub service_id: String,
    /// Storage of created offers
    pub order_storage: OfferStorageConfig,
}

impl Default for OfferToolConfig {
    fn default() -> Self {
        Self {
            service_id: DEFAULT_OFFER_TOOL_TYPE.to_string(),
            order_storage: OfferStorageConfig::default(),
        }
    }
}

/// Offer tool storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferStorageConfig {
    /// Class of stored offers
    pub offer_class: String,
    /// Class of stored offer items
    pub offer_item_class: String,
    /// Folder offers are stored in, strftime placeholders allowed
    pub parent_folder_path: String,
}

impl Default for OfferStorageConfig {
    fn default() -> Self {
        Self {
            offer_class: DEFAULT_OFFER_CLASS.to_string(),
            offer_item_class: DEFAULT_OFFER_ITEM_CLASS.to_string(),
            parent_folder_path: DEFAULT_OFFER_PARENT_FOLDER_PATH.to_string(),
        }
    }
}

/// Tracking manager configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingManagerConfig {
    /// Tracking manager implementation
    pub tracking_manager_id: String,
    /// Trackers in registration order
    pub trackers: Vec<TrackerConfig>,
}

impl Default for TrackingManagerConfig {
    fn default() -> Self {
        Self {
            tracking_manager_id: DEFAULT_TRACKING_MANAGER_TYPE.to_string(),
            trackers: Vec::new(),
        }
    }
}

/// One tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Tracker name (required)
    pub name: String,
    /// Disabled trackers are not registered
    pub enabled: bool,
    /// Tracker implementation (required)
    pub id: Option<String>,
    /// Tracking item builder implementation
    pub item_builder_id: Option<String>,
    /// Tracker options
    pub options: Option<Options>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            enabled: true,
            id: None,
            item_builder_id: None,
            options: None,
        }
    }
}
