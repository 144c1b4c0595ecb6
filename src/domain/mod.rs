//! Domain layer for the startup configuration
//!
//! This module contains the configuration model and its error types.

pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{ConfigError, ConfigResult};
