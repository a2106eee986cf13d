//! Domain Value Objects
//!
//! Immutable value objects describing what the composition engine works on.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Category`] | Fixed classification of service roles |
//! | [`ServiceKey`] | Key of a service inside its category |
//! | [`CheckoutKey`] | Composite `(name, tenant)` key of checkout services |
//! | [`ServiceId`] | Globally unique identity of a registered definition |
//! | [`AttributeConfig`] | Raw index attribute configuration |
//! | [`Attribute`] | Index attribute built by an attribute factory |
//! | [`Options`] | Opaque key-value bundle passed through verbatim |

/// Service role categories
pub mod category;
/// Service identities and keys
pub mod identity;
/// Index service attributes
pub mod attribute;

pub use attribute::{Attribute, AttributeConfig, AttributeHelper};
pub use category::Category;
pub use identity::{CheckoutKey, LocatorKey, ServiceId, ServiceKey};

/// Opaque key-value bundle (`options`, `factory_options`, profiles...)
///
/// Ordered so that composing the same configuration twice produces
/// identical wiring.
pub type Options = std::collections::BTreeMap<String, serde_json::Value>;
