//! Application Layer - Service Construction
//!
//! Holds the "build an instance from a symbolic type id and a parameter
//! map" capability the composition engine relies on. Implementations are
//! made known either explicitly through [`ConstructorRegistry::register`]
//! or at link time through the [`SERVICE_CONSTRUCTORS`] distributed slice.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `ecf-domain`: service port, resolved arguments, errors
//! - `linkme` for compile-time registration
//!
//! [`ConstructorRegistry::register`]: ports::registry::ConstructorRegistry::register
//! [`SERVICE_CONSTRUCTORS`]: ports::registry::SERVICE_CONSTRUCTORS

pub mod ports;

pub use ports::registry::{
    ConstructorRegistry, SERVICE_CONSTRUCTORS, ServiceConstructorEntry, list_linked_constructors,
};
