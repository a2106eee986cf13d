//! Service Constructor Registry
//!
//! Maps symbolic implementation ids to constructor functions. Uses the
//! `linkme` crate for compile-time registration of constructors that are
//! discovered when a registry is built with [`ConstructorRegistry::linked`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Constructor Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Impl crate defines: #[linkme::distributed_slice(            │
//! │                             SERVICE_CONSTRUCTORS)]              │
//! │                         static ENTRY: ServiceConstructorEntry   │
//! │                              ↓                                  │
//! │  2. Registry collects:  ConstructorRegistry::linked()           │
//! │                              ↓                                  │
//! │  3. Tests/apps add:     registry.register("id", "...", |args|)  │
//! │                              ↓                                  │
//! │  4. Container builds:   registry.construct(type_id, args)       │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use ecf_application::ports::registry::{ServiceConstructorEntry, SERVICE_CONSTRUCTORS};
//!
//! #[linkme::distributed_slice(SERVICE_CONSTRUCTORS)]
//! static SESSION_ENVIRONMENT: ServiceConstructorEntry = ServiceConstructorEntry {
//!     type_id: "session_environment",
//!     description: "Session backed environment",
//!     factory: |arguments| Ok(Box::new(SessionEnvironment::from_arguments(&arguments)?)),
//! };
//! ```

pub mod constructors;

pub use constructors::{
    ConstructorRegistry, SERVICE_CONSTRUCTORS, ServiceConstructorEntry, list_linked_constructors,
};
