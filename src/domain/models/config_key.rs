use serde::{Deserialize, Serialize};
use std::fmt;

/// A required configuration key.
///
/// Every key has a canonical dotted path (the spelling used by the frontend
/// `environment` module). Other spellings are accepted if they are equal
/// after [`fold_key`], because environment-variable providers lower-case
/// keys: `auth0.clientId` arrives as `auth0.clientid` or `auth0.client_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
    /// `production`: selects the environment mode
    Production,
    /// `apiServerUrl`: base URL for backend requests
    ApiServerUrl,
    /// `auth0.url`: identity-provider domain fragment
    AuthDomain,
    /// `auth0.audience`: protected resource identifier
    AuthAudience,
    /// `auth0.clientId`: public client identifier
    AuthClientId,
    /// `auth0.callbackURL`: post-authentication redirect target
    AuthCallbackUrl,
}

impl ConfigKey {
    /// All required keys, in validation order.
    pub const ALL: [Self; 6] = [
        Self::Production,
        Self::ApiServerUrl,
        Self::AuthDomain,
        Self::AuthAudience,
        Self::AuthClientId,
        Self::AuthCallbackUrl,
    ];

    /// Canonical dotted path of the key.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::ApiServerUrl => "apiServerUrl",
            Self::AuthDomain => "auth0.url",
            Self::AuthAudience => "auth0.audience",
            Self::AuthClientId => "auth0.clientId",
            Self::AuthCallbackUrl => "auth0.callbackURL",
        }
    }

    /// Environment variable suffix, nested with `__`.
    ///
    /// Combined with a prefix such as `COFFEESHOP_` this yields a variable the
    /// env provider maps back onto this key.
    pub const fn env_suffix(self) -> &'static str {
        match self {
            Self::Production => "PRODUCTION",
            Self::ApiServerUrl => "API_SERVER_URL",
            Self::AuthDomain => "AUTH0__URL",
            Self::AuthAudience => "AUTH0__AUDIENCE",
            Self::AuthClientId => "AUTH0__CLIENT_ID",
            Self::AuthCallbackUrl => "AUTH0__CALLBACK_URL",
        }
    }

    /// Full environment variable name for the given prefix.
    pub fn env_var(self, prefix: &str) -> String {
        format!("{prefix}{}", self.env_suffix())
    }

    /// Short description of the value shape this key expects.
    pub const fn expected(self) -> &'static str {
        match self {
            Self::Production => "a boolean (true or false)",
            Self::ApiServerUrl => "an absolute http(s) URL",
            Self::AuthDomain => "a domain fragment without scheme or path",
            Self::AuthAudience | Self::AuthClientId => "a non-empty string",
            Self::AuthCallbackUrl => "an absolute URL",
        }
    }
}

/// Fold a key spelling for comparison: ASCII lower-case, underscores removed.
pub fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
