// src/config/validate.rs

use serde_json::Value;

use crate::config::model::{RawConfig, SuzieqConfig};
use crate::errors::{FieldIssue, IssueKind, ValidationError};
use crate::schema::{API_KEY_FIELD, CONFIG_FIELDS, ENDPOINT_FIELD, FieldSpec};

impl TryFrom<RawConfig> for SuzieqConfig {
    type Error = ValidationError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::try_from(&raw)
    }
}

impl TryFrom<&RawConfig> for SuzieqConfig {
    type Error = ValidationError;

    fn try_from(raw: &RawConfig) -> Result<Self, Self::Error> {
        let issues = validate_raw_config(raw);
        if !issues.is_empty() {
            return Err(ValidationError::new(issues));
        }

        // Both fields passed `check_field`, so they are non-empty strings.
        let endpoint = string_field(raw, ENDPOINT_FIELD);
        let api_key = string_field(raw, API_KEY_FIELD);
        Ok(SuzieqConfig::from_parts_unchecked(endpoint, api_key))
    }
}

/// Check every schema field and collect all problems, in schema order.
///
/// Keys that are not part of the schema are ignored.
pub fn validate_raw_config(raw: &RawConfig) -> Vec<FieldIssue> {
    CONFIG_FIELDS
        .iter()
        .filter_map(|spec| check_field(spec, raw.get(spec.name)))
        .collect()
}

fn check_field(spec: &FieldSpec, value: Option<&Value>) -> Option<FieldIssue> {
    let kind = match value {
        None | Some(Value::Null) if spec.required => IssueKind::Missing,
        None | Some(Value::Null) => return None,
        Some(Value::String(s)) if s.is_empty() => IssueKind::Empty,
        Some(Value::String(_)) => return None,
        Some(other) => IssueKind::WrongType {
            found: json_type_name(other).to_string(),
        },
    };
    Some(FieldIssue::new(spec.name, kind))
}

fn string_field(raw: &RawConfig, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_two_non_empty_strings() {
        let cfg = SuzieqConfig::try_from(raw(json!({
            "suzieqApiEndpoint": "http://example.com/api/v2",
            "suzieqApiKey": "example_key_123",
        })))
        .unwrap();

        assert_eq!(cfg.endpoint(), "http://example.com/api/v2");
        assert_eq!(cfg.api_key(), "example_key_123");
    }

    #[test]
    fn missing_key_is_reported() {
        let err = SuzieqConfig::try_from(raw(json!({
            "suzieqApiEndpoint": "http://example.com/api/v2",
        })))
        .unwrap_err();

        assert_eq!(
            err.issues(),
            &[FieldIssue::new(API_KEY_FIELD, IssueKind::Missing)]
        );
    }

    #[test]
    fn empty_endpoint_counts_as_invalid() {
        let err = SuzieqConfig::try_from(raw(json!({
            "suzieqApiEndpoint": "",
            "suzieqApiKey": "k",
        })))
        .unwrap_err();

        assert_eq!(
            err.issues(),
            &[FieldIssue::new(ENDPOINT_FIELD, IssueKind::Empty)]
        );
    }

    #[test]
    fn whitespace_is_a_value_but_empty_string_is_not() {
        let cfg = SuzieqConfig::try_from(raw(json!({
            "suzieqApiEndpoint": " ",
            "suzieqApiKey": "  \t",
        })))
        .unwrap();
        assert_eq!(cfg.endpoint(), " ");
        assert_eq!(cfg.api_key(), "  \t");

        let err = SuzieqConfig::try_from(raw(json!({
            "suzieqApiEndpoint": "http://e",
            "suzieqApiKey": "",
        })))
        .unwrap_err();
        assert_eq!(err.issues(), &[FieldIssue::new(API_KEY_FIELD, IssueKind::Empty)]);
    }

    #[test]
    fn non_string_and_null_values_are_rejected() {
        let err = SuzieqConfig::try_from(raw(json!({
            "suzieqApiEndpoint": 8000,
            "suzieqApiKey": null,
        })))
        .unwrap_err();

        assert_eq!(
            err.issues(),
            &[
                FieldIssue::new(
                    ENDPOINT_FIELD,
                    IssueKind::WrongType {
                        found: "number".to_string()
                    }
                ),
                FieldIssue::new(API_KEY_FIELD, IssueKind::Missing),
            ]
        );
    }

    #[test]
    fn all_problems_are_collected_in_schema_order() {
        let err = SuzieqConfig::try_from(RawConfig::new()).unwrap_err();
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec![ENDPOINT_FIELD, API_KEY_FIELD]
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = SuzieqConfig::try_from(raw(json!({
            "suzieqApiEndpoint": "http://e",
            "suzieqApiKey": "k",
            "somethingElse": [1, 2, 3],
        })));
        assert!(cfg.is_ok());
    }
}
