//! # Infrastructure Layer
//!
//! Everything needed to turn a configuration tree into a published,
//! queryable service graph.
//!
//! ## Module Categories
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML/env configuration via figment |
//! | [`di`] | Registrars, validation, lazy container and locators |
//! | [`constants`] | Default implementation ids and config names |
//!
//! ### Collaborators
//! | Module | Description |
//! |--------|-------------|
//! | [`infrastructure`] | Default attribute factory, in-memory brick manager |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod infrastructure;
pub mod logging;

// Re-export commonly used types
pub use di::{CompositionEngine, Locator, ServiceLocators};
pub use error_ext::ErrorContext;
