use figment::providers::{Format, Json, Yaml};
use figment::value::{Dict, Value};
use figment::{Figment, Provider};
use tracing::debug;

use super::source::{Canonical, RawEnv, SourceOptions};
use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{
    AuthProviderConfig, ConfigKey, ConfigurationRecord, EnvironmentMode, ServiceUrl,
};

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build the layered configuration source
    ///
    /// Precedence (lowest to highest):
    /// 1. .coffeeshop/config.yaml (project config, created by init)
    /// 2. .coffeeshop/local.yaml (project local overrides, optional)
    /// 3. Explicit config file (`--config`, must exist)
    /// 4. Environment variables (COFFEESHOP_* prefix, highest priority)
    ///
    /// No programmatic defaults are merged: every value must be supplied.
    pub fn figment(options: &SourceOptions) -> ConfigResult<Figment> {
        let mut figment = Figment::new()
            .merge(Canonical::new(Yaml::file(options.base_file())))
            .merge(Canonical::new(Yaml::file(options.local_file())));

        if let Some(path) = &options.config_file {
            if !path.is_file() {
                return Err(ConfigError::Source {
                    origin: path.display().to_string(),
                    reason: "file not found".to_string(),
                });
            }

            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            figment = if is_json {
                figment.merge(Canonical::new(Json::file(path)))
            } else {
                figment.merge(Canonical::new(Yaml::file(path)))
            };
        }

        Ok(figment.merge(Canonical::new(RawEnv::prefixed(&options.env_prefix))))
    }

    /// Load and validate the layered configuration
    pub fn load(options: &SourceOptions) -> ConfigResult<ConfigurationRecord> {
        Self::resolve(Self::figment(options)?)
    }

    /// Read every required key from `source` and validate it
    ///
    /// Presence and type of all keys are checked first, in
    /// [`ConfigKey::ALL`] order, then the value shapes.
    pub fn resolve<P: Provider>(source: P) -> ConfigResult<ConfigurationRecord> {
        let data: Dict = Figment::from(Canonical::new(source)).extract()?;
        debug!(top_level_keys = data.len(), "configuration source read");

        let raw = RawValues::collect(&data)?;

        let mode = EnvironmentMode::from_production_flag(raw.production);
        let api_server_url = ServiceUrl::parse(ConfigKey::ApiServerUrl, raw.api_server_url)?;
        let callback_url = ServiceUrl::parse(ConfigKey::AuthCallbackUrl, raw.callback_url)?;
        let auth = AuthProviderConfig::new(raw.domain, raw.audience, raw.client_id, callback_url)?;

        ConfigurationRecord::new(mode, api_server_url, auth)
    }
}

/// Required values, present and of the right type but not yet validated.
struct RawValues<'a> {
    production: bool,
    api_server_url: &'a str,
    domain: &'a str,
    audience: &'a str,
    client_id: &'a str,
    callback_url: &'a str,
}

impl<'a> RawValues<'a> {
    fn collect(data: &'a Dict) -> ConfigResult<Self> {
        for key in ConfigKey::ALL {
            lookup(data, key)?;
        }

        Ok(Self {
            production: boolean(ConfigKey::Production, lookup(data, ConfigKey::Production)?)?,
            api_server_url: text(ConfigKey::ApiServerUrl, lookup(data, ConfigKey::ApiServerUrl)?)?,
            domain: text(ConfigKey::AuthDomain, lookup(data, ConfigKey::AuthDomain)?)?,
            audience: text(ConfigKey::AuthAudience, lookup(data, ConfigKey::AuthAudience)?)?,
            client_id: text(ConfigKey::AuthClientId, lookup(data, ConfigKey::AuthClientId)?)?,
            callback_url: text(
                ConfigKey::AuthCallbackUrl,
                lookup(data, ConfigKey::AuthCallbackUrl)?,
            )?,
        })
    }
}

/// Find `key` by its dotted path. Null values count as absent.
fn lookup(data: &Dict, key: ConfigKey) -> ConfigResult<&Value> {
    let mut segments = key.path().split('.');
    let found = segments.next().and_then(|first| data.get(first)).and_then(|value| {
        segments.try_fold(value, |current, segment| current.as_dict()?.get(segment))
    });

    match found {
        None | Some(Value::Empty(..)) => Err(ConfigError::MissingKey(key)),
        Some(value) => Ok(value),
    }
}

fn boolean(key: ConfigKey, value: &Value) -> ConfigResult<bool> {
    match value {
        Value::Bool(_, flag) => Ok(*flag),
        Value::String(_, s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
        Value::String(_, s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
        other => Err(ConfigError::invalid(key, format!("found {}", describe(other)))),
    }
}

fn text(key: ConfigKey, value: &Value) -> ConfigResult<&str> {
    match value {
        Value::String(_, s) => Ok(s.as_str()),
        other => Err(ConfigError::invalid(key, format!("found {}", describe(other)))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::String(..) => "a string",
        Value::Char(..) => "a single character",
        Value::Bool(..) => "a boolean",
        Value::Num(..) => "a number",
        Value::Empty(..) => "nothing",
        Value::Dict(..) => "a map",
        Value::Array(..) => "a list",
    }
}
