//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::endpoints::EndpointsArgs;
use super::commands::export::ExportArgs;
use super::commands::init::InitArgs;
use super::commands::show::ShowArgs;
use crate::infrastructure::config::{SourceOptions, DEFAULT_ENV_PREFIX};

#[derive(Parser, Debug)]
#[command(name = "coffeeshop-config")]
#[command(about = "Validate and export the Coffee Shop frontend configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Project directory containing .coffeeshop/
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Additional configuration file (YAML, or JSON by extension)
    #[arg(short, long, global = true, env = "COFFEESHOP_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Prefix of environment variable overrides
    #[arg(long, global = true, default_value = DEFAULT_ENV_PREFIX)]
    pub env_prefix: String,

    /// Also write rolling JSON log files into this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Configuration sources selected by the global flags.
    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            project_dir: self.project_dir.clone(),
            config_file: self.config.clone(),
            env_prefix: self.env_prefix.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a configuration template into .coffeeshop/config.yaml
    Init(InitArgs),

    #[command(flatten)]
    Config(ConfigCommands),
}

/// Commands that operate on the loaded configuration.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Load and validate the configuration
    Check,

    /// Show the resolved configuration
    Show(ShowArgs),

    /// Export the resolved configuration for deployment
    Export(ExportArgs),

    /// Print the URLs derived from the configuration
    Endpoints(EndpointsArgs),
}
