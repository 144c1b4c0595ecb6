//! Implementation of the `coffeeshop-config export` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

use crate::cli::display::{action_success, output, CommandOutput};
use crate::domain::models::ConfigurationRecord;
use crate::services::{render, ExportFormat};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Yaml)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub format: ExportFormat,
    pub path: Option<PathBuf>,
    pub bytes: usize,
    pub content: Option<String>,
}

impl CommandOutput for ExportOutput {
    fn to_human(&self) -> String {
        match (&self.path, &self.content) {
            (Some(path), _) => action_success(&format!(
                "Wrote {} bytes of {:?} to {}",
                self.bytes,
                self.format,
                path.display()
            )),
            (None, Some(content)) => content.trim_end().to_string(),
            (None, None) => String::new(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(
    args: ExportArgs,
    record: &ConfigurationRecord,
    env_prefix: &str,
    json_mode: bool,
) -> Result<()> {
    let rendered = render(record, args.format, env_prefix)?;
    let bytes = rendered.len();

    let output_data = if let Some(path) = args.output {
        fs::write(&path, &rendered)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), format = ?args.format, bytes, "configuration exported");
        ExportOutput {
            format: args.format,
            path: Some(path),
            bytes,
            content: None,
        }
    } else {
        ExportOutput {
            format: args.format,
            path: None,
            bytes,
            content: Some(rendered),
        }
    };

    output(&output_data, json_mode);
    Ok(())
}
