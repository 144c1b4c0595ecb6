//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML/JSON file loading
//! - Environment variable overrides
//! - Key canonicalization across layers
//! - Validation into a `ConfigurationRecord`

pub mod loader;
pub mod source;

pub use loader::ConfigLoader;
pub use source::{Canonical, RawEnv, SourceOptions, CONFIG_DIR, DEFAULT_ENV_PREFIX};
