//! Area Brick Manager Port
//!
//! Capability used to register, look up and toggle area bricks by id.
//! Rendering is not part of this port.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// An area brick known to the manager
pub trait Brick: Send + Sync + fmt::Debug {
    /// Unique brick id
    fn id(&self) -> &str;

    /// Human readable name
    fn name(&self) -> &str {
        self.id()
    }
}

/// Registry of area bricks with an enabled state per brick
///
/// Bricks are enabled by default and can be switched off explicitly.
/// Every operation taking an id fails with a not-found error for ids
/// that were never registered.
pub trait BrickManager: Send + Sync {
    /// Register a brick; registering the same id twice is an error
    fn register(&self, brick: Arc<dyn Brick>) -> Result<()>;

    /// Fetch a brick by id
    fn brick(&self, id: &str) -> Result<Arc<dyn Brick>>;

    /// All registered bricks
    fn bricks(&self) -> Vec<Arc<dyn Brick>>;

    /// Enable a brick
    fn enable(&self, id: &str) -> Result<()>;

    /// Disable a brick
    fn disable(&self, id: &str) -> Result<()>;

    /// Whether a brick is enabled
    fn is_enabled(&self, id: &str) -> Result<bool>;
}
