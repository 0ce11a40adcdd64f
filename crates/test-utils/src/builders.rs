#![allow(dead_code)]

use serde_json::Value;
use suzieq_launch::config::{RawConfig, SuzieqConfig};
use suzieq_launch::schema::{API_KEY_FIELD, ENDPOINT_FIELD, EXAMPLE_API_KEY, EXAMPLE_ENDPOINT};

/// Builder for `RawConfig` to simplify test setup.
///
/// Starts from the documented example values; each method replaces or
/// removes one field so a test only spells out what it breaks.
pub struct RawConfigBuilder {
    config: RawConfig,
}

impl RawConfigBuilder {
    pub fn new() -> Self {
        let mut config = RawConfig::new();
        config.insert(ENDPOINT_FIELD, EXAMPLE_ENDPOINT);
        config.insert(API_KEY_FIELD, EXAMPLE_API_KEY);
        Self { config }
    }

    pub fn endpoint(mut self, value: impl Into<Value>) -> Self {
        self.config.insert(ENDPOINT_FIELD, value);
        self
    }

    pub fn api_key(mut self, value: impl Into<Value>) -> Self {
        self.config.insert(API_KEY_FIELD, value);
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        self.config.fields.remove(field);
        self
    }

    pub fn extra(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.config.insert(key, value);
        self
    }

    pub fn build(self) -> RawConfig {
        self.config
    }

    /// Build and validate; panics if the result is invalid.
    pub fn build_valid(self) -> SuzieqConfig {
        SuzieqConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for RawConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
