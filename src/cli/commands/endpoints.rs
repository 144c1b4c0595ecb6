//! Implementation of the `coffeeshop-config endpoints` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::display::{list_table, output, CommandOutput};
use crate::domain::models::ConfigurationRecord;

/// Frontend route the identity provider returns to after login.
pub const DEFAULT_CALLBACK_PATH: &str = "/tabs/user-page";

#[derive(Args, Debug)]
pub struct EndpointsArgs {
    /// Path appended to the callback URL in the login redirect
    #[arg(long, default_value = DEFAULT_CALLBACK_PATH)]
    pub callback_path: String,
}

#[derive(Debug, Serialize)]
pub struct EndpointsOutput {
    pub api_base: String,
    pub drinks: String,
    pub drinks_detail: String,
    pub issuer: String,
    pub jwks: String,
    pub authorize: String,
    pub logout: String,
}

impl EndpointsOutput {
    pub fn from_record(record: &ConfigurationRecord, callback_path: &str) -> Result<Self> {
        let auth = record.auth();
        Ok(Self {
            api_base: record.api_server_url().to_string(),
            drinks: record.api_url("/drinks").to_string(),
            drinks_detail: record.api_url("/drinks-detail").to_string(),
            issuer: auth.issuer(),
            jwks: auth.jwks_url().context("Failed to build JWKS URL")?.to_string(),
            authorize: auth
                .authorize_url(callback_path)
                .context("Failed to build authorize URL")?
                .to_string(),
            logout: auth.logout_url().context("Failed to build logout URL")?.to_string(),
        })
    }
}

impl CommandOutput for EndpointsOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["endpoint", "url"]);
        for (name, url) in [
            ("api base", &self.api_base),
            ("drinks", &self.drinks),
            ("drinks detail", &self.drinks_detail),
            ("issuer", &self.issuer),
            ("jwks", &self.jwks),
            ("authorize", &self.authorize),
            ("logout", &self.logout),
        ] {
            table.add_row(vec![name, url.as_str()]);
        }
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &EndpointsArgs, record: &ConfigurationRecord, json_mode: bool) -> Result<()> {
    output(&EndpointsOutput::from_record(record, &args.callback_path)?, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;
    use figment::providers::Serialized;

    #[test]
    fn test_endpoints_for_sample() {
        let record = ConfigLoader::resolve(Serialized::defaults(serde_json::json!({
            "production": false,
            "apiServerUrl": "http://127.0.0.1:5000",
            "auth0": {
                "url": "dabolinux.us",
                "audience": "CoffeeShopNew",
                "clientId": "0qFP6YXf2hS20ERx8TQJDmrTK1EmZ17q",
                "callbackURL": "http://localhost:8100"
            }
        })))
        .unwrap();

        let endpoints = EndpointsOutput::from_record(&record, DEFAULT_CALLBACK_PATH).unwrap();
        assert_eq!(endpoints.api_base, "http://127.0.0.1:5000");
        assert_eq!(endpoints.drinks, "http://127.0.0.1:5000/drinks");
        assert_eq!(endpoints.drinks_detail, "http://127.0.0.1:5000/drinks-detail");
        assert_eq!(endpoints.issuer, "https://dabolinux.us.auth0.com/");
        assert_eq!(
            endpoints.jwks,
            "https://dabolinux.us.auth0.com/.well-known/jwks.json"
        );
        assert!(endpoints
            .authorize
            .starts_with("https://dabolinux.us.auth0.com/authorize?audience=CoffeeShopNew&response_type=token&client_id=0qFP6YXf2hS20ERx8TQJDmrTK1EmZ17q&redirect_uri="));
        assert!(endpoints
            .authorize
            .ends_with("redirect_uri=http%3A%2F%2Flocalhost%3A8100%2Ftabs%2Fuser-page"));
    }
}
