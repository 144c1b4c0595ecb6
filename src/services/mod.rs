//! Service layer
//!
//! - `config_provider`: one-shot loading and shared access to the record
//! - `exporter`: rendering a record into deployable formats

pub mod config_provider;
pub mod exporter;

pub use config_provider::{ConfigProvider, ProviderState};
pub use exporter::{render, ExportFormat};
