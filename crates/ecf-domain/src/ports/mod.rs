//! Domain Port Interfaces
//!
//! Boundaries between the composition engine and the surrounding platform.
//! The engine consumes these; concrete implementations are supplied from
//! outside (constructors, attribute factories, brick managers).
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Service`] | A constructed service instance |
//! | [`Arguments`] | Resolved constructor arguments handed to a constructor |
//! | [`AttributeFactory`] | Builds index attributes from raw configuration |
//! | [`BrickManager`] | Registers and toggles area bricks by id |

/// Attribute factory port
pub mod attributes;
/// Area brick manager port
pub mod bricks;
/// Service instance port and resolved arguments
pub mod service;

pub use attributes::AttributeFactory;
pub use bricks::{Brick, BrickManager};
pub use service::{Arguments, ResolvedArgument, Service};
