//! Configuration types module
//!
//! | Module | Section |
//! |--------|---------|
//! | [`app`] | Root [`AppConfig`] |
//! | [`logging`] | `[logging]` |
//! | [`composition`] | `[composition]` |
//! | [`ecommerce`] | `[ecommerce]` root, environment, carts, orders, pricing, systems |
//! | [`checkout`] | `[ecommerce.checkout_manager]`, `[ecommerce.payment_manager]` |
//! | [`catalog`] | `[ecommerce.index_service]`, `[ecommerce.filter_service]` |
//! | [`marketing`] | `[ecommerce.voucher_service]`, `[ecommerce.offer_tool]`, `[ecommerce.tracking_manager]` |

pub mod app;
pub mod catalog;
pub mod checkout;
pub mod composition;
pub mod ecommerce;
pub mod logging;
pub mod marketing;

// Re-export main types
pub use app::*;
pub use catalog::*;
pub use checkout::*;
pub use ecommerce::*;
pub use marketing::*;
