//! Service Composition
//!
//! Turns the e-commerce configuration tree into a validated, lazily
//! instantiated service graph.
//!
//! ## Architecture Overview
//!
//! ```text
//! EcommerceConfig
//!      │
//!      ▼
//! Category Registrars ──(resolver)──► Registration (definitions + parameters)
//!      │
//!      ▼
//! DefinitionSet ──► validation (references, cycles, types, bricks)
//!      │
//!      ▼
//! ServiceContainer (OnceCell per definition)
//!      │
//!      ▼
//! ServiceLocators { Locator per category, root services, parameters }
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`resolver`] | Cross-reference resolution with tenant defaulting |
//! | [`definitions`] | Registrar output and the merged definition set |
//! | [`registrars`] | One registrar per category |
//! | [`validation`] | Composition-time consistency checks |
//! | [`container`] | Lazy, thread-safe instantiation |
//! | [`locator`] | Immutable per-category lookup |
//! | [`locators`] | The published composition result |
//! | [`engine`] | Orchestrates the above in a fixed order |
//! | [`bootstrap`] | Logging + composition entry point |

pub mod bootstrap;
pub mod container;
pub mod definitions;
pub mod engine;
pub mod locator;
pub mod locators;
pub mod registrars;
pub mod resolver;
pub mod validation;

pub use bootstrap::{AppContext, init_app, init_app_with_logging};
pub use container::ServiceContainer;
pub use definitions::{DefinitionSet, Registration};
pub use engine::CompositionEngine;
pub use locator::Locator;
pub use locators::ServiceLocators;
pub use resolver::{resolve_optional, resolve_reference};
