//! Infrastructure layer module
//!
//! This module contains the adapters to the outside world:
//! - Configuration sources (files and environment via figment)
//! - Logging infrastructure

pub mod config;
pub mod logging;
