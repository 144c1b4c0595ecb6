//! Command-line interface
//!
//! Startup happens in two phases: the configuration is loaded and validated
//! first, then logging is installed with the profile of the loaded
//! environment mode.

pub mod commands;
pub mod display;
pub mod types;

pub use types::{Cli, Commands, ConfigCommands};

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use crate::domain::models::EnvironmentMode;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};
use crate::services::ConfigProvider;
use display::action_failure;

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let options = cli.source_options();
    let Cli {
        command,
        json,
        verbose,
        log_dir,
        env_prefix,
        ..
    } = cli;

    match command {
        Commands::Init(args) => {
            let log_config = LogConfig::for_mode(EnvironmentMode::Development)
                .with_verbosity(verbose)
                .with_log_dir(log_dir);
            let _logger = LoggerImpl::init(&log_config)?;
            commands::init::execute(args, &options, json).await
        }
        Commands::Config(command) => {
            let provider = ConfigProvider::new();
            let record = provider
                .load_layered(&options)
                .context("Failed to load configuration")?;

            let log_config = LogConfig::for_mode(record.mode())
                .with_verbosity(verbose)
                .with_log_dir(log_dir);
            let _logger = LoggerImpl::init(&log_config)?;
            info!(
                mode = %record.mode(),
                project_dir = %options.project_dir.display(),
                "configuration loaded"
            );

            run_config_command(command, &provider, &env_prefix, json).await
        }
    }
}

async fn run_config_command(
    command: ConfigCommands,
    provider: &ConfigProvider,
    env_prefix: &str,
    json: bool,
) -> Result<()> {
    let record = provider.get()?;
    match command {
        ConfigCommands::Check => commands::check::execute(record, json),
        ConfigCommands::Show(args) => commands::show::execute(&args, record, json),
        ConfigCommands::Export(args) => {
            commands::export::execute(args, record, env_prefix, json).await
        }
        ConfigCommands::Endpoints(args) => commands::endpoints::execute(&args, record, json),
    }
}

/// Report a fatal error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{}", action_failure(&format!("{err:#}")));
    }
    std::process::exit(1);
}
