//! Application bootstrap
//!
//! Composition root: configuration in, [`AppContext`] out.
//!
//! ```text
//! AppConfig ──► init_logging ──► CompositionEngine::compose ──► AppContext
//!                                      ▲
//!                          ConstructorRegistry (linkme + explicit)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let engine = CompositionEngine::new(ConstructorRegistry::linked());
//! let context = init_app(config, engine)?;
//!
//! let cart_manager = context.locators().cart_managers().get("store1")?;
//! ```

use std::sync::Arc;

use ecf_domain::error::Result;
use tracing::info;

use super::engine::CompositionEngine;
use super::locators::ServiceLocators;
use crate::config::AppConfig;
use crate::logging::init_logging;

/// Application context: configuration plus the composed service graph
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    locators: ServiceLocators,
}

impl AppContext {
    /// Composed locators
    pub fn locators(&self) -> &ServiceLocators {
        &self.locators
    }
}

/// Compose the service graph of `config`
///
/// The engine's settings are replaced by `config.composition`.
pub fn init_app(config: AppConfig, engine: CompositionEngine) -> Result<AppContext> {
    let engine = engine.with_settings(config.composition.clone());
    let locators = engine.compose(&config.ecommerce)?;
    info!("Application context ready");
    Ok(AppContext {
        config: Arc::new(config),
        locators,
    })
}

/// Initialize logging from `config.logging`, then compose
pub fn init_app_with_logging(config: AppConfig, engine: CompositionEngine) -> Result<AppContext> {
    init_logging(&config.logging)?;
    init_app(config, engine)
}
