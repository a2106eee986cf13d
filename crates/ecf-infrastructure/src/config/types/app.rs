//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::composition::CompositionSettings;
pub use super::ecommerce::EcommerceConfig;
pub use super::logging::LoggingConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Composition engine settings
    pub composition: CompositionSettings,
    /// E-commerce service configuration tree
    pub ecommerce: EcommerceConfig,
}
