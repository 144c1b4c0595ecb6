use serde::{Deserialize, Serialize};
use std::fmt;
use url::{Host, Url};

use super::config_key::ConfigKey;
use crate::domain::errors::{ConfigError, ConfigResult};

/// Suffix appended to a bare tenant prefix to form the identity-provider host.
pub const AUTH0_HOST_SUFFIX: &str = ".auth0.com";

/// Deployment mode of the consuming application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    Development,
    Production,
}

impl EnvironmentMode {
    /// Map the `production` flag onto a mode.
    pub const fn from_production_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for EnvironmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// An absolute URL that remembers the exact text it was parsed from.
///
/// `url::Url` normalises its input (`http://host:5000` becomes
/// `http://host:5000/`), so the original text is kept for round-tripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl {
    raw: String,
    parsed: Url,
}

impl ServiceUrl {
    /// Parse `raw` as the value of `key`.
    ///
    /// The URL must be absolute, carry a host, and have no surrounding
    /// whitespace.
    pub fn parse(key: ConfigKey, raw: &str) -> ConfigResult<Self> {
        if raw.trim().is_empty() {
            return Err(ConfigError::invalid(key, "value is empty"));
        }
        if raw.trim() != raw {
            return Err(ConfigError::invalid(key, "value has surrounding whitespace"));
        }

        let parsed = Url::parse(raw).map_err(|e| ConfigError::invalid(key, e.to_string()))?;
        if !parsed.has_host() {
            return Err(ConfigError::invalid(key, "URL has no host"));
        }

        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// The URL exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed form.
    pub const fn url(&self) -> &Url {
        &self.parsed
    }

    /// Append the segments of `route` to the path, keeping any query.
    fn join(&self, route: &str) -> Url {
        let mut url = self.parsed.clone();
        let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();
        if !segments.is_empty() {
            if let Ok(mut path) = url.path_segments_mut() {
                path.pop_if_empty().extend(segments);
            }
        }
        url
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Identity-provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthProviderConfig {
    domain: String,
    audience: String,
    client_id: String,
    callback_url: ServiceUrl,
}

impl AuthProviderConfig {
    /// Validate and assemble the identity-provider settings.
    pub fn new(
        domain: &str,
        audience: &str,
        client_id: &str,
        callback_url: ServiceUrl,
    ) -> ConfigResult<Self> {
        validate_domain(domain)?;
        require_text(ConfigKey::AuthAudience, audience)?;
        require_text(ConfigKey::AuthClientId, client_id)?;

        Ok(Self {
            domain: domain.to_string(),
            audience: audience.to_string(),
            client_id: client_id.to_string(),
            callback_url,
        })
    }

    /// Domain fragment as configured (`auth0.url`).
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Callback URL exactly as configured.
    pub fn callback_url(&self) -> &str {
        self.callback_url.as_str()
    }

    /// Host of the identity-provider tenant.
    ///
    /// The domain fragment is a tenant prefix (`dabolinux.us`) unless it
    /// already ends in `.auth0.com`.
    pub fn tenant_host(&self) -> String {
        if self.domain.ends_with(AUTH0_HOST_SUFFIX) {
            self.domain.clone()
        } else {
            format!("{}{AUTH0_HOST_SUFFIX}", self.domain)
        }
    }

    /// Token issuer identifier.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_host())
    }

    /// Location of the tenant's signing keys.
    pub fn jwks_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "https://{}/.well-known/jwks.json",
            self.tenant_host()
        ))
    }

    /// Implicit-flow login URL redirecting back to `callback_path` under the
    /// callback URL.
    pub fn authorize_url(&self, callback_path: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("https://{}/authorize", self.tenant_host()))?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri(callback_path));
        Ok(url)
    }

    /// Logout URL returning to the callback URL.
    pub fn logout_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("https://{}/v2/logout", self.tenant_host()))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", self.callback_url.as_str());
        Ok(url)
    }

    fn redirect_uri(&self, callback_path: &str) -> String {
        let path = callback_path.trim_start_matches('/');
        if path.is_empty() {
            self.callback_url.as_str().to_string()
        } else {
            format!(
                "{}/{path}",
                self.callback_url.as_str().trim_end_matches('/')
            )
        }
    }
}

/// The validated, immutable startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    mode: EnvironmentMode,
    api_server_url: ServiceUrl,
    auth: AuthProviderConfig,
}

impl ConfigurationRecord {
    /// Assemble a record. The API URL must use `http` or `https`.
    pub fn new(
        mode: EnvironmentMode,
        api_server_url: ServiceUrl,
        auth: AuthProviderConfig,
    ) -> ConfigResult<Self> {
        let scheme = api_server_url.url().scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::invalid(
                ConfigKey::ApiServerUrl,
                format!("unsupported scheme `{scheme}`"),
            ));
        }

        Ok(Self {
            mode,
            api_server_url,
            auth,
        })
    }

    pub const fn mode(&self) -> EnvironmentMode {
        self.mode
    }

    pub const fn is_production(&self) -> bool {
        self.mode.is_production()
    }

    /// API base URL exactly as configured.
    pub fn api_server_url(&self) -> &str {
        self.api_server_url.as_str()
    }

    pub const fn api_base(&self) -> &ServiceUrl {
        &self.api_server_url
    }

    pub const fn auth(&self) -> &AuthProviderConfig {
        &self.auth
    }

    /// Resolve a backend route such as `/drinks` against the API base.
    pub fn api_url(&self, route: &str) -> Url {
        self.api_server_url.join(route)
    }

    /// Serializable view using the frontend `environment` key names.
    pub fn document(&self) -> EnvironmentDocument<'_> {
        EnvironmentDocument {
            production: self.is_production(),
            api_server_url: self.api_server_url(),
            auth0: AuthDocument {
                url: self.auth.domain(),
                audience: self.auth.audience(),
                client_id: self.auth.client_id(),
                callback_url: self.auth.callback_url(),
            },
        }
    }
}

/// Borrowed view of a record shaped like the frontend `environment` object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentDocument<'a> {
    pub production: bool,
    pub api_server_url: &'a str,
    pub auth0: AuthDocument<'a>,
}

/// The `auth0` section of [`EnvironmentDocument`].
#[derive(Debug, Serialize)]
pub struct AuthDocument<'a> {
    pub url: &'a str,
    pub audience: &'a str,
    #[serde(rename = "clientId")]
    pub client_id: &'a str,
    #[serde(rename = "callbackURL")]
    pub callback_url: &'a str,
}

fn require_text(key: ConfigKey, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(key, "value is empty"));
    }
    Ok(())
}

fn validate_domain(domain: &str) -> ConfigResult<()> {
    require_text(ConfigKey::AuthDomain, domain)?;
    match Host::parse(domain) {
        Ok(Host::Domain(_)) => Ok(()),
        Ok(_) => Err(ConfigError::invalid(
            ConfigKey::AuthDomain,
            "IP addresses are not tenant domains",
        )),
        Err(e) => Err(ConfigError::invalid(ConfigKey::AuthDomain, e.to_string())),
    }
}
