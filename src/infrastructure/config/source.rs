use figment::providers::Env;
use figment::value::{Dict, Map, Tag, Value};
use figment::{Error, Metadata, Profile, Provider};
use std::path::{Path, PathBuf};

use crate::domain::models::{fold_key, ConfigKey};

/// Project-local configuration directory.
pub const CONFIG_DIR: &str = ".coffeeshop";

/// Default prefix for environment variable overrides.
pub const DEFAULT_ENV_PREFIX: &str = "COFFEESHOP_";

/// Where the layered configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    /// Project root containing `.coffeeshop/`
    pub project_dir: PathBuf,

    /// Explicit configuration file (YAML, or JSON by extension)
    pub config_file: Option<PathBuf>,

    /// Environment variable prefix
    pub env_prefix: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            config_file: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }
}

impl SourceOptions {
    /// Options rooted at `project_dir` with the default env prefix.
    pub fn for_project(project_dir: impl AsRef<Path>) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// `.coffeeshop/config.yaml`, the primary project config.
    pub fn base_file(&self) -> PathBuf {
        self.project_dir.join(CONFIG_DIR).join("config.yaml")
    }

    /// `.coffeeshop/local.yaml`, uncommitted developer overrides.
    pub fn local_file(&self) -> PathBuf {
        self.project_dir.join(CONFIG_DIR).join("local.yaml")
    }
}

/// Wraps a provider and rewrites its keys to their canonical spelling.
///
/// Figment merges keys case-sensitively, so `auth0.client_id` from the
/// environment would otherwise sit next to `auth0.clientId` from a file
/// instead of overriding it. Unknown keys pass through untouched.
pub struct Canonical<P> {
    inner: P,
}

impl<P: Provider> Canonical<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Provider> Provider for Canonical<P> {
    fn metadata(&self) -> Metadata {
        self.inner.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let data = self.inner.data()?;
        Ok(data
            .into_iter()
            .map(|(profile, dict)| (profile, canonicalize(dict, "")))
            .collect())
    }

    fn profile(&self) -> Option<Profile> {
        self.inner.profile()
    }
}

/// Environment variables with their values kept as plain strings.
///
/// figment's `Env` parses values, turning `12345678` into a number and
/// `"My API"` into `My API`. Identifiers must arrive exactly as set, so only
/// the key mapping (prefix stripping, `__` nesting) is taken from `Env`.
pub struct RawEnv {
    env: Env,
}

impl RawEnv {
    /// Variables starting with `prefix`, nested on `__`.
    pub fn prefixed(prefix: &str) -> Self {
        Self {
            env: Env::prefixed(prefix).split("__"),
        }
    }
}

impl Provider for RawEnv {
    fn metadata(&self) -> Metadata {
        self.env.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();
        for (key, value) in self.env.iter() {
            insert_path(&mut dict, key.as_str(), value);
        }

        let mut data = Map::new();
        data.insert(Profile::Default, dict);
        Ok(data)
    }
}

/// Insert `value` at the dotted `path`, creating intermediate dictionaries.
fn insert_path(dict: &mut Dict, path: &str, value: String) {
    let Some((head, rest)) = path.split_once('.') else {
        dict.insert(path.to_string(), Value::from(value));
        return;
    };

    let entry = dict
        .entry(head.to_string())
        .or_insert_with(|| Value::Dict(Tag::Default, Dict::new()));
    if !matches!(entry, Value::Dict(..)) {
        *entry = Value::Dict(Tag::Default, Dict::new());
    }
    if let Value::Dict(_, inner) = entry {
        insert_path(inner, rest, value);
    }
}

/// Rename the keys of `dict` (found under the dotted `prefix`) to their
/// canonical spelling. An exact canonical spelling wins over other
/// spellings of the same key within one dictionary.
fn canonicalize(dict: Dict, prefix: &str) -> Dict {
    let names: Vec<&'static str> = ConfigKey::ALL
        .into_iter()
        .filter_map(|key| key.path().strip_prefix(prefix))
        .filter_map(|rest| rest.split('.').next())
        .collect();

    let mut out = Dict::new();
    let mut exact = Vec::new();

    for (key, value) in dict {
        let folded = fold_key(&key);
        let Some(name) = names.iter().find(|name| fold_key(name) == folded) else {
            out.insert(key, value);
            continue;
        };

        let value = match value {
            Value::Dict(tag, inner) => {
                Value::Dict(tag, canonicalize(inner, &format!("{prefix}{name}.")))
            }
            other => other,
        };

        if *name == key {
            exact.push((key, value));
        } else {
            out.insert((*name).to_string(), value);
        }
    }

    out.extend(exact);
    out
}
