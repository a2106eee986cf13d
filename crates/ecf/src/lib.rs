//! # E-commerce Service Composition
//!
//! Declarative, multi-tenant wiring of e-commerce services.
//!
//! A single configuration tree describes the environment, cart and order
//! managers, pricing, checkout, payment, catalog index, filters, vouchers,
//! offers and tracking of any number of tenants. The composition engine
//! turns it into validated service definitions and publishes one lazy
//! locator per category; services are built on first lookup by
//! externally supplied constructors.
//!
//! ## Example
//!
//! ```ignore
//! use ecf::application::ConstructorRegistry;
//! use ecf::infrastructure::config::ConfigLoader;
//! use ecf::infrastructure::di::{CompositionEngine, init_app};
//!
//! let config = ConfigLoader::new().with_config_path("ecf.toml").load()?;
//! let context = init_app(config, CompositionEngine::new(ConstructorRegistry::linked()))?;
//!
//! let cart_manager = context.locators().cart_managers().get("store1")?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Definitions, identities, errors and ports
//! - `application` - Constructor registry (explicit and link-time)
//! - `infrastructure` - Configuration, logging, registrars and the lazy container

/// Domain layer - definitions, identities, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ecf_domain::*;
}

/// Application layer - service constructors
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use ecf_application::*;
}

/// Infrastructure layer - config, logging and composition
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ecf_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the composition entry points at the crate root
pub use application::ConstructorRegistry;
pub use infrastructure::di::{AppContext, CompositionEngine, ServiceLocators, init_app};
