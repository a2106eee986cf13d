//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **registry/** - Constructor registry and auto-registration slice

/// Constructor registry for symbolic implementation ids
pub mod registry;
