//! coffeeshop-config - typed startup configuration for the Coffee Shop frontend
//!
//! The frontend needs a handful of values at startup: the API base URL, the
//! identity-provider tenant, audience, client id and callback URL, and whether
//! this is a production build. This crate loads them once from layered
//! sources, validates them eagerly, and hands out an immutable record.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration record, keys and errors
//! - **Service Layer** (`services`): the one-shot provider and exporters
//! - **Infrastructure Layer** (`infrastructure`): figment sources and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use coffeeshop_config::{ConfigProvider, SourceOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let provider = ConfigProvider::new();
//!     provider.load_layered(&SourceOptions::for_project("."))?;
//!
//!     let config = provider.get()?;
//!     println!("API at {}", config.api_server_url());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AuthProviderConfig, ConfigKey, ConfigurationRecord, EnvironmentMode, ServiceUrl,
};
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::{ConfigLoader, SourceOptions};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
pub use services::{render, ConfigProvider, ExportFormat, ProviderState};
