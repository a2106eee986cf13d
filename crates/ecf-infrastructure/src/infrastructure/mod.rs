//! Infrastructure Services
//!
//! Default implementations of the collaborator ports the composition
//! engine consumes.
//!
//! | Implementation | Port |
//! |----------------|------|
//! | [`DefaultAttributeFactory`] | `AttributeFactory` |
//! | [`InMemoryBrickManager`] | `BrickManager` |

pub mod attributes;
pub mod bricks;

pub use attributes::DefaultAttributeFactory;
pub use bricks::{InMemoryBrickManager, NamedBrick};
