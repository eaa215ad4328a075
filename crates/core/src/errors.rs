//! Validation Errors

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    slice::Iter,
    vec::IntoIter,
};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::path::FieldPath;

/// Kind a field was declared with, as reported in type errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedKind {
    /// JSON string
    String,

    /// String, number or boolean
    Scalar,

    /// JSON number
    Number,

    /// JSON boolean
    Boolean,

    /// JSON array
    Array,

    /// JSON object
    Object,
}

impl Display for ExpectedKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::String => "string",
            Self::Scalar => "scalar",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// Type of the value that was actually supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// `null`
    Null,

    /// `true` or `false`
    Boolean,

    /// Any JSON number
    Number,

    /// Any JSON string
    String,

    /// Any JSON array
    Array,

    /// Any JSON object
    Object,
}

impl JsonType {
    /// Classifies a raw value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl Display for JsonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// The rule a field violated, with its context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule")]
pub enum Rule {
    /// A required field was absent, `null` or an empty string.
    #[serde(rename = "required")]
    Required,

    /// The value had the wrong JSON type.
    #[serde(rename = "type")]
    TypeMismatch {
        /// Declared kind
        expected: ExpectedKind,

        /// Supplied type
        actual: JsonType,
    },

    /// The value was not one of the allowed literals.
    #[serde(rename = "enum")]
    EnumViolation {
        /// Allowed literals
        allowed: &'static [&'static str],
    },

    /// The array held fewer elements than required.
    #[serde(rename = "array_min_size")]
    ArrayTooSmall {
        /// Smallest accepted length
        min: usize,

        /// Supplied length
        actual: usize,
    },

    /// The payload itself was not an object.
    #[serde(rename = "malformed_root")]
    MalformedRoot {
        /// Supplied type
        actual: JsonType,
    },

    /// A structurally valid payload could not be read into its typed form.
    #[serde(rename = "decode")]
    Decode {
        /// Decoder message
        message: String,
    },
}

impl Rule {
    /// Serialized name of the rule, as found in the `rule` key.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TypeMismatch { .. } => "type",
            Self::EnumViolation { .. } => "enum",
            Self::ArrayTooSmall { .. } => "array_min_size",
            Self::MalformedRoot { .. } => "malformed_root",
            Self::Decode { .. } => "decode",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Required => f.write_str("is required"),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "must be a {expected}, got {actual}")
            }
            Self::EnumViolation { allowed } => {
                write!(f, "must be one of: {}", allowed.join(", "))
            }
            Self::ArrayTooSmall { min, actual } => {
                write!(f, "must contain at least {min} element(s), got {actual}")
            }
            Self::MalformedRoot { actual } => write!(f, "payload must be an object, got {actual}"),
            Self::Decode { message } => write!(f, "could not be decoded: {message}"),
        }
    }
}

/// A single violation at a field path.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{field} {rule}")]
pub struct FieldError {
    /// Where the violation occurred
    pub field: FieldPath,

    /// What was violated
    #[serde(flatten)]
    pub rule: Rule,
}

impl FieldError {
    /// Creates an error at `field`.
    #[must_use]
    pub fn new(field: FieldPath, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// Creates an error at the payload root.
    #[must_use]
    pub fn root(rule: Rule) -> Self {
        Self::new(FieldPath::root(), rule)
    }
}

/// Every violation found in one validation pass, in discovery order.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(transparent)]
#[error("payload failed validation with {} error(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the violations in discovery order.
    pub fn iter(&self) -> Iter<'_, FieldError> {
        self.0.iter()
    }

    /// The violation recorded at `path`, if any.
    pub fn at(&self, path: &str) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field.to_string() == path)
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::path::PathSegment;

    use super::*;

    #[test]
    fn type_mismatch_serializes_flat() -> TestResult {
        let error = FieldError::new(
            FieldPath::from(
                [
                    PathSegment::Field("variations"),
                    PathSegment::Index(1),
                    PathSegment::Field("price"),
                ]
                .as_slice(),
            ),
            Rule::TypeMismatch {
                expected: ExpectedKind::Number,
                actual: JsonType::String,
            },
        );

        assert_eq!(
            serde_json::to_value(&error)?,
            json!({
                "field": "variations[1].price",
                "rule": "type",
                "expected": "number",
                "actual": "string",
            })
        );

        Ok(())
    }

    #[test]
    fn malformed_root_reports_root_placeholder() -> TestResult {
        let errors = ValidationErrors::from(FieldError::root(Rule::MalformedRoot {
            actual: JsonType::Null,
        }));

        assert_eq!(
            serde_json::to_value(&errors)?,
            json!([{ "field": "<root>", "rule": "malformed_root", "actual": "null" }])
        );

        Ok(())
    }

    #[test]
    fn display_reads_as_sentence() {
        let error = FieldError::root(Rule::Required);

        assert_eq!(error.to_string(), "<root> is required");
    }
}
