//! Custom error types for the common library
//!
//! This module defines the validation and configuration errors shared by
//! the services. Validation errors carry every field-level violation found
//! in one pass so the calling layer can report them together.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Reason a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Field absent or null
    Missing,
    /// Field present but not a string
    ExpectedString,
    /// Field present but not an integer (or integer-like string)
    ExpectedInteger,
    /// Input is not a key/value mapping
    ExpectedObject,
    /// Text field is empty or whitespace only
    Empty,
    /// Text field exceeds the configured length
    TooLong { max: usize },
    /// Email does not match `local@domain.tld`
    InvalidEmail,
    /// Number has a fractional part
    Fractional,
    /// Integer does not fit the target type
    OutOfRange,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "field required"),
            ViolationKind::ExpectedString => write!(f, "expected string"),
            ViolationKind::ExpectedInteger => write!(f, "expected integer"),
            ViolationKind::ExpectedObject => write!(f, "expected an object"),
            ViolationKind::Empty => write!(f, "must not be empty"),
            ViolationKind::TooLong { max } => write!(f, "must be at most {} characters", max),
            ViolationKind::InvalidEmail => write!(f, "invalid email format"),
            ViolationKind::Fractional => write!(f, "fractional value not allowed"),
            ViolationKind::OutOfRange => write!(f, "value out of range"),
        }
    }
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: String,
    kind: ViolationKind,
}

impl FieldViolation {
    /// Create a violation for `field`
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Human-readable reason
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Serialize for FieldViolation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldViolation", 2)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Validation failure holding every violated field
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Validation failed: {}", join_violations(.errors))]
pub struct ValidationError {
    errors: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build an error from collected violations
    pub fn new(errors: Vec<FieldViolation>) -> Self {
        Self { errors }
    }

    /// Error with a single violation
    pub fn single(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            errors: vec![FieldViolation::new(field, kind)],
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.errors
    }

    /// Names of the violated fields, in report order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(FieldViolation::field).collect()
    }

    /// Violation recorded for `field`, if any
    pub fn violation(&self, field: &str) -> Option<&FieldViolation> {
        self.errors.iter().find(|v| v.field == field)
    }
}

fn join_violations(errors: &[FieldViolation]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Type alias for Result with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable present but unparsable
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
