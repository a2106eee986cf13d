//! Lazy service container
//!
//! Owns the frozen definition set and one [`OnceCell`] per registered
//! definition. A service is built on first lookup:
//!
//! ```text
//! get(id) ──► cell initialized? ──yes──► Arc clone
//!                   │ no
//!                   ▼
//!   resolve arguments (references recurse into get)
//!                   │
//!                   ▼
//!   ConstructorRegistry::construct(type_id, arguments)
//!                   │
//!                   ▼
//!   apply recorded method calls, then share as Arc
//! ```
//!
//! `OnceCell::get_or_try_init` runs at most one initializer per cell, so
//! concurrent first lookups of a name observe a single instance. A failed
//! initialization leaves the cell empty.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ecf_application::ConstructorRegistry;
use ecf_domain::definition::{Argument, ServiceDefinition};
use ecf_domain::error::{Error, Result};
use ecf_domain::ports::{Arguments, ResolvedArgument, Service};
use ecf_domain::value_objects::ServiceId;
use once_cell::sync::OnceCell;
use tracing::debug;

use super::definitions::DefinitionSet;
use crate::error_ext::OptionExt;

/// Lazily instantiating store of registered services
pub struct ServiceContainer {
    definitions: DefinitionSet,
    cells: BTreeMap<ServiceId, OnceCell<Arc<dyn Service>>>,
    constructors: ConstructorRegistry,
}

impl ServiceContainer {
    /// Freeze a definition set behind lazily initialized cells
    pub fn new(definitions: DefinitionSet, constructors: ConstructorRegistry) -> Self {
        let cells = definitions
            .iter()
            .map(|(id, _)| (id.clone(), OnceCell::new()))
            .collect();
        Self {
            definitions,
            cells,
            constructors,
        }
    }

    /// Service registered under `id`, constructed on first use
    ///
    /// # Errors
    /// * `NotFound` - nothing is registered under `id`
    /// * `Construction` / `UnknownServiceType` / `UnsupportedMethod` - building failed
    pub fn get(&self, id: &ServiceId) -> Result<Arc<dyn Service>> {
        let cell = self
            .cells
            .get(id)
            .ok_or_not_found(format!("service {id}"))?;
        cell.get_or_try_init(|| self.instantiate(id)).cloned()
    }

    /// Whether a service is registered under `id`
    pub fn contains(&self, id: &ServiceId) -> bool {
        self.cells.contains_key(id)
    }

    /// Whether the service under `id` has already been built
    pub fn is_instantiated(&self, id: &ServiceId) -> bool {
        self.cells.get(id).is_some_and(|cell| cell.get().is_some())
    }

    /// Definition registered under `id`
    pub fn definition(&self, id: &ServiceId) -> Option<&ServiceDefinition> {
        self.definitions.get(id)
    }

    /// The frozen definition set
    pub fn definitions(&self) -> &DefinitionSet {
        &self.definitions
    }

    /// Constructors used to build services
    pub fn constructors(&self) -> &ConstructorRegistry {
        &self.constructors
    }

    fn instantiate(&self, id: &ServiceId) -> Result<Arc<dyn Service>> {
        let definition = self
            .definitions
            .get(id)
            .ok_or_not_found(format!("definition of {id}"))?;
        debug!(service = %id, type_id = definition.type_id(), "Instantiating service");
        self.build(id, definition).map(Arc::from)
    }

    /// Build a registered or inline definition on behalf of `owner`
    fn build(&self, owner: &ServiceId, definition: &ServiceDefinition) -> Result<Box<dyn Service>> {
        let mut arguments = Arguments::new();
        for (name, argument) in definition.arguments() {
            arguments.insert(name.as_str(), self.resolve(owner, argument)?);
        }

        let mut service = self
            .constructors
            .construct(definition.type_id(), arguments)
            .map_err(|err| match err {
                Error::Construction { message, .. } => Error::construction(owner, message),
                other => other,
            })?;

        for call in definition.method_calls() {
            let arguments = call
                .arguments
                .iter()
                .map(|argument| self.resolve(owner, argument))
                .collect::<Result<Vec<_>>>()?;
            service.call(&call.method, arguments)?;
        }

        Ok(service)
    }

    fn resolve(&self, owner: &ServiceId, argument: &Argument) -> Result<ResolvedArgument> {
        Ok(match argument {
            Argument::Literal(value) => ResolvedArgument::Value(value.clone()),
            Argument::Reference(reference) => ResolvedArgument::Service(self.get(reference.target())?),
            Argument::Inline(definition) => {
                ResolvedArgument::Service(Arc::from(self.build(owner, definition)?))
            }
            Argument::Map(entries) => ResolvedArgument::Map(
                entries
                    .iter()
                    .map(|(name, argument)| Ok((name.clone(), self.resolve(owner, argument)?)))
                    .collect::<Result<_>>()?,
            ),
        })
    }
}

impl fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instantiated = self.cells.values().filter(|cell| cell.get().is_some()).count();
        f.debug_struct("ServiceContainer")
            .field("definitions", &self.definitions.len())
            .field("instantiated", &instantiated)
            .finish()
    }
}
