//! Reference Resolver
//!
//! Turns "which tenant of category X does this entry depend on" into a
//! [`CrossReference`]. When no tenant is configured explicitly the entry's
//! own name is used:
//!
//! ```text
//! cart_manager.tenants.store1                (no order_manager_tenant)
//!                    │
//!                    ▼
//! resolve_reference(OrderManager, None, "store1")
//!                    │
//!                    ▼
//! CrossReference(ecommerce.order_manager.store1)
//! ```
//!
//! The substitution is a single step. A defaulted name is never looked up
//! again to find a further default, and nothing here checks that the
//! target exists; dangling references are reported by
//! [`validate_references`](super::validation::validate_references).

use ecf_domain::definition::CrossReference;
use ecf_domain::value_objects::{Category, ServiceId};

/// Resolve a reference to a named entry of `category`
///
/// # Arguments
/// * `category` - Category of the referenced entry
/// * `explicit` - Configured name, if any
/// * `default` - Name used when `explicit` is `None`
pub fn resolve_reference(category: Category, explicit: Option<&str>, default: &str) -> CrossReference {
    let name = explicit.unwrap_or(default);
    CrossReference::new(ServiceId::named(category, name))
}

/// Resolve a reference that only exists when a name is configured
///
/// Used where absence means "do not wire this dependency", e.g. the payment
/// provider of a checkout tenant.
pub fn resolve_optional(category: Category, explicit: Option<&str>) -> Option<CrossReference> {
    explicit.map(|name| CrossReference::new(ServiceId::named(category, name)))
}
