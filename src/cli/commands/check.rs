//! Implementation of the `coffeeshop-config check` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::{action_success, output, CommandOutput};
use crate::domain::models::{ConfigurationRecord, EnvironmentMode};

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub mode: EnvironmentMode,
    pub api_server_url: String,
    pub message: String,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        action_success(&self.message)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Loading already validated the record; report what was accepted.
pub fn execute(record: &ConfigurationRecord, json_mode: bool) -> Result<()> {
    let output_data = CheckOutput {
        success: true,
        mode: record.mode(),
        api_server_url: record.api_server_url().to_string(),
        message: format!(
            "Configuration is valid ({} build, API at {})",
            record.mode(),
            record.api_server_url()
        ),
    };
    output(&output_data, json_mode);
    Ok(())
}
