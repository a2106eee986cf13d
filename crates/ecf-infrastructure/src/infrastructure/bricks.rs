//! In-memory area brick manager
//!
//! Tracks registered bricks and their enabled state. Rendering is outside
//! this crate; only registration and toggling live here.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use ecf_domain::error::{Error, Result};
use ecf_domain::ports::{Brick, BrickManager};
use tracing::info;

use crate::error_ext::OptionExt;

/// Brick identified by id and display name only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBrick {
    id: String,
    name: String,
}

impl NamedBrick {
    /// Create a brick whose name equals its id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Brick for NamedBrick {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

struct BrickEntry {
    brick: Arc<dyn Brick>,
    enabled: bool,
}

/// Brick manager backed by a concurrent map
///
/// Newly registered bricks are enabled.
#[derive(Default)]
pub struct InMemoryBrickManager {
    bricks: DashMap<String, BrickEntry>,
}

impl InMemoryBrickManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    fn set_enabled(&self, id: &str, enabled: bool) -> Result<()> {
        let mut entry = self
            .bricks
            .get_mut(id)
            .ok_or_not_found(format!("area brick \"{id}\""))?;
        entry.enabled = enabled;
        info!(brick = %id, enabled, "Area brick state changed");
        Ok(())
    }
}

impl BrickManager for InMemoryBrickManager {
    fn register(&self, brick: Arc<dyn Brick>) -> Result<()> {
        match self.bricks.entry(brick.id().to_string()) {
            Entry::Occupied(occupied) => Err(Error::invalid_argument(format!(
                "area brick \"{}\" is already registered",
                occupied.key()
            ))),
            Entry::Vacant(vacant) => {
                vacant.insert(BrickEntry {
                    brick,
                    enabled: true,
                });
                Ok(())
            }
        }
    }

    fn brick(&self, id: &str) -> Result<Arc<dyn Brick>> {
        self.bricks
            .get(id)
            .map(|entry| Arc::clone(&entry.brick))
            .ok_or_not_found(format!("area brick \"{id}\""))
    }

    fn bricks(&self) -> Vec<Arc<dyn Brick>> {
        let mut bricks: Vec<Arc<dyn Brick>> = self
            .bricks
            .iter()
            .map(|entry| Arc::clone(&entry.value().brick))
            .collect();
        bricks.sort_by(|a, b| a.id().cmp(b.id()));
        bricks
    }

    fn enable(&self, id: &str) -> Result<()> {
        self.set_enabled(id, true)
    }

    fn disable(&self, id: &str) -> Result<()> {
        self.set_enabled(id, false)
    }

    fn is_enabled(&self, id: &str) -> Result<bool> {
        self.bricks
            .get(id)
            .map(|entry| entry.enabled)
            .ok_or_not_found(format!("area brick \"{id}\""))
    }
}

impl fmt::Debug for InMemoryBrickManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBrickManager")
            .field("bricks", &self.bricks.len())
            .finish()
    }
}
