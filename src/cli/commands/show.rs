//! Implementation of the `coffeeshop-config show` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::display::{colorize_mode, mask_secret, output, CommandOutput, DetailView};
use crate::domain::models::{ConfigurationRecord, EnvironmentMode};

/// Characters of the client id left readable when masked.
const VISIBLE_CLIENT_ID_CHARS: usize = 4;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print the client id unmasked
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowOutput {
    pub mode: EnvironmentMode,
    pub api_server_url: String,
    pub auth_domain: String,
    pub tenant_host: String,
    pub audience: String,
    pub client_id: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl ShowOutput {
    pub fn from_record(record: &ConfigurationRecord, reveal: bool) -> Self {
        let auth = record.auth();
        let client_id = if reveal {
            auth.client_id().to_string()
        } else {
            mask_secret(auth.client_id(), VISIBLE_CLIENT_ID_CHARS)
        };

        Self {
            mode: record.mode(),
            api_server_url: record.api_server_url().to_string(),
            auth_domain: auth.domain().to_string(),
            tenant_host: auth.tenant_host(),
            audience: auth.audience().to_string(),
            client_id,
            callback_url: auth.callback_url().to_string(),
        }
    }
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        DetailView::new("Configuration")
            .field("mode", &colorize_mode(self.mode).to_string())
            .field("api server", &self.api_server_url)
            .section("Identity provider")
            .field("domain", &self.auth_domain)
            .field("tenant host", &self.tenant_host)
            .field("audience", &self.audience)
            .field("client id", &self.client_id)
            .field("callback", &self.callback_url)
            .render()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &ShowArgs, record: &ConfigurationRecord, json_mode: bool) -> Result<()> {
    output(&ShowOutput::from_record(record, args.reveal), json_mode);
    Ok(())
}
