//! # Domain Layer
//!
//! Core types of the e-commerce service composition engine.
//!
//! The domain describes *how* services are built without building them:
//! identities ([`value_objects::ServiceId`]), recipes
//! ([`definition::ServiceDefinition`]) and the ports the engine consumes
//! from the surrounding platform.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy for composition and lookup |
//! | [`constants`] | Service id prefix, tag names and parameter keys |
//! | [`value_objects`] | Categories, service identities, index attributes |
//! | [`definition`] | Service definition model (recipes, references) |
//! | [`ports`] | `Service`, `Arguments`, `AttributeFactory`, `BrickManager` |

pub mod constants;
pub mod definition;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use definition::{Argument, CrossReference, MethodCall, ServiceDefinition, Tag};
pub use error::{Error, Result};
pub use value_objects::{Category, CheckoutKey, ServiceId, ServiceKey};
