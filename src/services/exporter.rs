//! Render a loaded record back into deployable formats.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::domain::models::{ConfigKey, ConfigurationRecord};

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON document with the frontend key names
    Json,
    /// YAML document, loadable as `.coffeeshop/config.yaml`
    Yaml,
    /// `PREFIX_KEY='value'` lines for a shell or `.env` file
    Env,
    /// Angular-style `environment.ts` module for build-time injection
    Typescript,
}

/// Render `record` in `format`. `env_prefix` is only used by [`ExportFormat::Env`].
pub fn render(record: &ConfigurationRecord, format: ExportFormat, env_prefix: &str) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let mut out = serde_json::to_string_pretty(&record.document())
                .context("Failed to serialize configuration as JSON")?;
            out.push('\n');
            Ok(out)
        }
        ExportFormat::Yaml => serde_yaml::to_string(&record.document())
            .context("Failed to serialize configuration as YAML"),
        ExportFormat::Env => Ok(render_env(record, env_prefix)),
        ExportFormat::Typescript => Ok(render_typescript(record)),
    }
}

fn value_of(record: &ConfigurationRecord, key: ConfigKey) -> String {
    let auth = record.auth();
    match key {
        ConfigKey::Production => record.is_production().to_string(),
        ConfigKey::ApiServerUrl => record.api_server_url().to_string(),
        ConfigKey::AuthDomain => auth.domain().to_string(),
        ConfigKey::AuthAudience => auth.audience().to_string(),
        ConfigKey::AuthClientId => auth.client_id().to_string(),
        ConfigKey::AuthCallbackUrl => auth.callback_url().to_string(),
    }
}

fn render_env(record: &ConfigurationRecord, prefix: &str) -> String {
    ConfigKey::ALL
        .into_iter()
        .map(|key| format!("{}={}\n", key.env_var(prefix), shell_quote(&value_of(record, key))))
        .collect()
}

fn render_typescript(record: &ConfigurationRecord) -> String {
    let auth = record.auth();
    let mut out = String::from("// Generated by coffeeshop-config. Do not edit by hand.\n\n");
    out.push_str("export const environment = {\n");
    let _ = writeln!(out, "  production: {},", record.is_production());
    let _ = writeln!(out, "  apiServerUrl: {},", ts_string(record.api_server_url()));
    out.push_str("  auth0: {\n");
    let _ = writeln!(out, "    url: {},", ts_string(auth.domain()));
    let _ = writeln!(out, "    audience: {},", ts_string(auth.audience()));
    let _ = writeln!(out, "    clientId: {},", ts_string(auth.client_id()));
    let _ = writeln!(out, "    callbackURL: {},", ts_string(auth.callback_url()));
    out.push_str("  },\n};\n");
    out
}

/// Single-quote `value` for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Single-quoted TypeScript string literal.
fn ts_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\'' => out.push_str(r"\'"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}
