//! Category Registrars
//!
//! One registrar per category turns its configuration slice into service
//! definitions and published parameters. Registrars are pure: they never
//! construct services and never look at other categories' output.
//!
//! | Registrar | Categories |
//! |-----------|------------|
//! | [`EnvironmentRegistrar`] | `environment` |
//! | [`CartManagerRegistrar`] | `cart_manager` |
//! | [`OrderManagerRegistrar`] | `order_manager` |
//! | [`PricingManagerRegistrar`] | `pricing_manager` |
//! | [`SystemRegistrar`] | `price_system`, `availability_system` |
//! | [`CheckoutManagerRegistrar`] | `checkout_manager.commit_order_processor`, `checkout_manager.factory` |
//! | [`PaymentManagerRegistrar`] | `payment_manager`, `payment_manager.provider` |
//! | [`IndexServiceRegistrar`] | `index_service`, `index_service.config` |
//! | [`FilterServiceRegistrar`] | `filter_service` |
//! | [`VoucherServiceRegistrar`] | `voucher_service`, `voucher_service.token_manager_factory` |
//! | [`OfferToolRegistrar`] | `offer_tool` |
//! | [`TrackingManagerRegistrar`] | `tracking_manager` |

use ecf_domain::error::Result;
use ecf_domain::value_objects::Category;

use super::definitions::Registration;

/// Catalog and filter registrars
pub mod catalog;
/// Checkout and payment registrars
pub mod checkout;
/// Environment, cart and order registrars
pub mod commerce;
/// Voucher, offer and tracking registrars
pub mod marketing;
/// Pricing manager and system registrars
pub mod pricing;

pub use catalog::{FilterServiceRegistrar, IndexServiceRegistrar};
pub use checkout::{CheckoutManagerRegistrar, PaymentManagerRegistrar};
pub use commerce::{CartManagerRegistrar, EnvironmentRegistrar, OrderManagerRegistrar};
pub use marketing::{OfferToolRegistrar, TrackingManagerRegistrar, VoucherServiceRegistrar};
pub use pricing::{PricingManagerRegistrar, SystemRegistrar};

/// Turns one configuration slice into definitions
pub trait CategoryRegistrar {
    /// Configuration slice consumed by the registrar
    type Config;

    /// Primary category, used for logging and diagnostics
    fn category(&self) -> Category;

    /// Build the definitions of the slice
    ///
    /// Fails on the first structural or validation error; a failed pass
    /// registers nothing.
    fn register(&self, config: &Self::Config) -> Result<Registration>;
}
