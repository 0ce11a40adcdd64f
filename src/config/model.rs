// src/config/model.rs

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::errors::ValidationError;
use crate::schema::{API_KEY_FIELD, CONFIG_FIELDS, ENDPOINT_FIELD};

/// A configuration object exactly as a host (or a config file) hands it over.
///
/// Nothing is checked yet: keys may be missing and values may be of any
/// JSON type. Convert to [`SuzieqConfig`] with `SuzieqConfig::try_from`.
///
/// ```toml
/// suzieqApiEndpoint = "http://example.com/api/v2"
/// suzieqApiKey = "example_key_123"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfig {
    pub fields: BTreeMap<String, Value>,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Build a raw config from environment variables, one per schema field.
    ///
    /// `lookup` is usually `|name| std::env::var(name).ok()`; tests pass a
    /// closure over a map instead. Unset variables are simply left out so
    /// validation reports them as missing.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut raw = Self::new();
        for spec in CONFIG_FIELDS.iter() {
            if let Some(value) = lookup(spec.env_var) {
                raw.insert(spec.name, value);
            }
        }
        raw
    }
}

/// A validated configuration instance.
///
/// The only ways to obtain one are [`SuzieqConfig::new`], `TryFrom<RawConfig>`
/// and deserialization (which goes through `TryFrom`), so an existing value
/// always has a non-empty endpoint and key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct SuzieqConfig {
    #[serde(rename = "suzieqApiEndpoint")]
    endpoint: String,
    #[serde(rename = "suzieqApiKey")]
    api_key: String,
}

impl SuzieqConfig {
    /// Smart constructor; fails when either value is empty.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut raw = RawConfig::new();
        raw.insert(ENDPOINT_FIELD, endpoint.into());
        raw.insert(API_KEY_FIELD, api_key.into());
        Self::try_from(raw)
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Like [`SuzieqConfig::from_env`] with an injectable variable lookup.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::try_from(RawConfig::from_env_with(lookup))
    }

    /// Callers must have checked both values already.
    pub(crate) fn from_parts_unchecked(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Parse the endpoint as a URL.
    ///
    /// Advisory only: validation accepts any non-empty endpoint.
    pub fn endpoint_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.endpoint)
    }

    /// Value for the schema field `name`, if it is one of ours.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        match name {
            ENDPOINT_FIELD => Some(&self.endpoint),
            API_KEY_FIELD => Some(&self.api_key),
            _ => None,
        }
    }
}

impl fmt::Debug for SuzieqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuzieqConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
