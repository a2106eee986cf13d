//! Composition-time validation
//!
//! | Check | Error | When |
//! |-------|-------|------|
//! | [`require_field`] | `MissingField` | inside each registrar pass |
//! | [`select_payment_profile`] | `ProfileNotFound` | payment registrar, per provider |
//! | [`validate_references`] | `UnresolvedReference` | after all registrars |
//! | [`detect_cycles`] | `CircularReference` | after reference validation |
//! | [`verify_service_types`] | `UnknownServiceType` | optional, `composition.verify_service_types` |
//! | [`validate_bricks`] | `Configuration` | before any brick state changes |
//!
//! Nothing is published until every check has passed.

use std::collections::BTreeMap;

use ecf_application::ConstructorRegistry;
use ecf_domain::error::{Error, Result};
use ecf_domain::ports::BrickManager;
use ecf_domain::value_objects::{Category, Options, ServiceId};
use tracing::warn;

use super::definitions::DefinitionSet;
use crate::config::{BrickConfig, PaymentProviderConfig};

/// Require a configuration value to be present and non-blank
pub fn require_field<'a>(
    category: Category,
    entry: &str,
    field: &str,
    value: Option<&'a str>,
) -> Result<&'a str> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::missing_field(category, entry, field)),
    }
}

/// Select the profile a payment provider is configured to use
///
/// An empty profile is valid; a profile name missing from `profiles` is not.
pub fn select_payment_profile<'a>(
    provider: &str,
    config: &'a PaymentProviderConfig,
) -> Result<&'a Options> {
    let profile = require_field(
        Category::PaymentProvider,
        provider,
        "profile",
        config.profile.as_deref(),
    )?;
    config
        .profiles
        .get(profile)
        .ok_or_else(|| Error::profile_not_found(provider, profile))
}

/// Every cross reference must target a registered definition
pub fn validate_references(definitions: &DefinitionSet) -> Result<()> {
    for (id, definition) in definitions.iter() {
        for reference in definition.references() {
            if !definitions.contains(reference.target()) {
                return Err(Error::unresolved_reference(
                    id.clone(),
                    reference.target().clone(),
                ));
            }
        }
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Reject reference cycles between registered definitions
///
/// Lazy construction of a cycle would re-enter an initializing cell, so
/// cycles must never reach the container.
pub fn detect_cycles(definitions: &DefinitionSet) -> Result<()> {
    let mut marks = BTreeMap::new();
    let mut path = Vec::new();
    for (id, _) in definitions.iter() {
        visit(definitions, id, &mut marks, &mut path)?;
    }
    Ok(())
}

fn visit<'a>(
    definitions: &'a DefinitionSet,
    id: &'a ServiceId,
    marks: &mut BTreeMap<&'a ServiceId, Mark>,
    path: &mut Vec<&'a ServiceId>,
) -> Result<()> {
    match marks.get(id) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            let start = path.iter().position(|entry| *entry == id).unwrap_or(0);
            let mut chain: Vec<ServiceId> = path[start..].iter().map(|entry| (*entry).clone()).collect();
            chain.push(id.clone());
            return Err(Error::CircularReference { chain });
        }
        None => {}
    }

    marks.insert(id, Mark::Visiting);
    path.push(id);
    if let Some(definition) = definitions.get(id) {
        for reference in definition.references() {
            visit(definitions, reference.target(), marks, path)?;
        }
    }
    path.pop();
    marks.insert(id, Mark::Done);
    Ok(())
}

/// Every implementation id in the graph must have a registered constructor
pub fn verify_service_types(
    definitions: &DefinitionSet,
    constructors: &ConstructorRegistry,
) -> Result<()> {
    for (id, definition) in definitions.iter() {
        for type_id in definition.type_ids() {
            if !constructors.contains(type_id) {
                warn!(service = %id, type_id, "No constructor registered");
                return Err(constructors.unknown_type(type_id));
            }
        }
    }
    Ok(())
}

/// Every configured brick id must be known to the brick manager
pub fn validate_bricks(
    manager: &dyn BrickManager,
    bricks: &BTreeMap<String, BrickConfig>,
) -> Result<()> {
    for id in bricks.keys() {
        manager.brick(id).map_err(|err| {
            Error::configuration_with_source(
                format!("Area brick \"{id}\" is configured but not registered"),
                err,
            )
        })?;
    }
    Ok(())
}
