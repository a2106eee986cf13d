//! Configuration
//!
//! [`ConfigLoader`] merges defaults, an optional `ecf.toml` and `ECF_*`
//! environment variables into an [`AppConfig`] using figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
