// src/errors.rs

//! Crate-wide error types.
//!
//! [`ValidationError`] is the single domain failure: a configuration
//! instance that does not satisfy the schema. Everything else (reading
//! files, parsing TOML/JSON, spawning) is wrapped by [`LaunchError`].

use std::fmt;

use thiserror::Error;

/// Why a single schema field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The field is not present at all.
    Missing,
    /// The field is present but the empty string.
    Empty,
    /// The field is present but not a string.
    WrongType { found: String },
}

/// One rejected field of a configuration instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "`{}` is required but missing", self.field),
            IssueKind::Empty => write!(f, "`{}` must not be empty", self.field),
            IssueKind::WrongType { found } => {
                write!(f, "`{}` must be a string (got {})", self.field, found)
            }
        }
    }
}

/// A configuration instance failed schema validation.
///
/// Always carries at least one [`FieldIssue`], one per offending field, in
/// schema order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid configuration: {}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Names of the fields that were rejected.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|i| i.field.as_str())
    }

    /// Whether `field` is among the rejected fields.
    pub fn involves(&self, field: &str) -> bool {
        self.fields().any(|f| f == field)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
