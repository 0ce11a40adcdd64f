// src/schema.rs

//! Declared configuration schema for the SuzieQ MCP server launcher.
//!
//! [`CONFIG_FIELDS`] is the single table the rest of the crate reads:
//! - `config` validates instances against it,
//! - `launch` maps each field onto its environment variable,
//! - [`json_schema`] renders it for hosts that collect user input.

use serde_json::{Map, Value, json};

use crate::config::SuzieqConfig;

/// Config key holding the SuzieQ REST API base URL.
pub const ENDPOINT_FIELD: &str = "suzieqApiEndpoint";
/// Config key holding the SuzieQ API credential.
pub const API_KEY_FIELD: &str = "suzieqApiKey";

/// Environment variable the server reads its endpoint from.
pub const ENDPOINT_ENV: &str = "SUZIEQ_API_ENDPOINT";
/// Environment variable the server reads its API key from.
pub const API_KEY_ENV: &str = "SUZIEQ_API_KEY";

pub const EXAMPLE_ENDPOINT: &str = "http://example.com/api/v2";
pub const EXAMPLE_API_KEY: &str = "example_key_123";

/// Semantic type of a schema field. Both are strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Url,
}

/// One declared configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub env_var: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
    /// Whether the value is a credential and must not be echoed.
    pub secret: bool,
}

pub static CONFIG_FIELDS: [FieldSpec; 2] = [
    FieldSpec {
        name: ENDPOINT_FIELD,
        env_var: ENDPOINT_ENV,
        kind: FieldKind::Url,
        required: true,
        description: "The API endpoint URL for SuzieQ (e.g., http://your-suzieq-host:8000/api/v2).",
        secret: false,
    },
    FieldSpec {
        name: API_KEY_FIELD,
        env_var: API_KEY_ENV,
        kind: FieldKind::String,
        required: true,
        description: "The API key for authenticating with SuzieQ.",
        secret: true,
    },
];

/// Look up a field by its config key.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    CONFIG_FIELDS.iter().find(|f| f.name == name)
}

/// Render the schema as a JSON Schema object.
pub fn json_schema() -> Value {
    let mut properties = Map::new();
    for spec in CONFIG_FIELDS.iter() {
        let mut prop = Map::new();
        prop.insert("type".into(), json!("string"));
        if spec.kind == FieldKind::Url {
            prop.insert("format".into(), json!("uri"));
        }
        prop.insert("description".into(), json!(spec.description));
        properties.insert(spec.name.to_string(), Value::Object(prop));
    }

    let required: Vec<&str> = CONFIG_FIELDS
        .iter()
        .filter(|f| f.required)
        .map(|f| f.name)
        .collect();

    json!({
        "type": "object",
        "required": required,
        "properties": properties,
    })
}

/// The documented example instance.
pub fn example_config() -> SuzieqConfig {
    SuzieqConfig::from_parts_unchecked(EXAMPLE_ENDPOINT, EXAMPLE_API_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required_with_distinct_env_var() {
        assert!(CONFIG_FIELDS.iter().all(|f| f.required));
        assert_ne!(CONFIG_FIELDS[0].env_var, CONFIG_FIELDS[1].env_var);
    }

    #[test]
    fn json_schema_lists_required_fields_and_types() {
        let schema = json_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!([ENDPOINT_FIELD, API_KEY_FIELD]));
        assert_eq!(schema["properties"][ENDPOINT_FIELD]["type"], "string");
        assert_eq!(schema["properties"][ENDPOINT_FIELD]["format"], "uri");
        assert_eq!(schema["properties"][API_KEY_FIELD]["type"], "string");
        assert!(schema["properties"][API_KEY_FIELD].get("format").is_none());
    }

    #[test]
    fn lookup_by_name_finds_declared_fields_only() {
        let spec = field(API_KEY_FIELD).unwrap();
        assert_eq!(spec.env_var, API_KEY_ENV);
        assert!(spec.secret);
        assert!(field("nope").is_none());
    }

    #[test]
    fn example_config_matches_documented_values() {
        let cfg = example_config();
        assert_eq!(cfg.endpoint(), EXAMPLE_ENDPOINT);
        assert_eq!(cfg.api_key(), EXAMPLE_API_KEY);
    }
}
