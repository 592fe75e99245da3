//! User schema validator
//!
//! Turns untyped records into the typed user shapes. Validation is
//! all-or-nothing: every violated field is collected and reported in one
//! [`ValidationError`], in field order (`id`, `name`, `email`, `age`).

use common::config::SchemaConfig;
use common::error::ConfigResult;
use common::{FieldViolation, ValidationError, ValidationResult, ViolationKind};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::{debug, warn};

use crate::models::{User, UserBase, UserCreate};
use crate::validation;

/// Field reported when the input itself is not a mapping
pub const BODY_FIELD: &str = "body";

/// Anything that exposes user attributes by name.
///
/// Implement this for persistence types to feed them to
/// [`UserSchema::from_persisted`]. Absent attributes return `None`; a JSON
/// `null` is treated the same way.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>>;
}

impl AttributeSource for Map<String, Value> {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl AttributeSource for Value {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.as_object().and_then(|fields| fields.attribute(name))
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        (**self).attribute(name)
    }
}

/// Validator for the user shapes
#[derive(Debug, Clone, Default)]
pub struct UserSchema {
    config: SchemaConfig,
}

impl UserSchema {
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// Create a validator configured from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self::new(SchemaConfig::from_env()?))
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Validate a request body against the shared user fields
    pub fn validate_as_base(&self, input: &Value) -> ValidationResult<UserBase> {
        let fields = object(input)?;
        let base = self.base_fields(fields).map_err(reject)?;
        debug!("user payload accepted");
        Ok(base)
    }

    /// Validate a user creation payload
    pub fn validate_as_create(&self, input: &Value) -> ValidationResult<UserCreate> {
        let fields = object(input)?;
        let base = self.base_fields(fields).map_err(reject)?;
        debug!("user creation payload accepted");
        Ok(UserCreate::new(base))
    }

    /// Build a [`User`] from a stored record.
    ///
    /// Reads `id`, `name`, `email` and `age` off `record`; extra attributes
    /// are ignored.
    pub fn from_persisted<S: AttributeSource + ?Sized>(&self, record: &S) -> ValidationResult<User> {
        let id = self.integer_field(record, "id");
        let base = self.base_fields(record);

        match (id, base) {
            (Ok(id), Ok(base)) => Ok(User::new(id, base)),
            (id, base) => {
                let mut violations: Vec<FieldViolation> = id.err().into_iter().collect();
                violations.extend(base.err().unwrap_or_default());

                let err = ValidationError::new(violations);
                warn!(error = %err, "persisted user record failed validation");
                Err(err)
            }
        }
    }

    fn base_fields<S: AttributeSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<UserBase, Vec<FieldViolation>> {
        let name = self.text_field(source, "name", |name| {
            validation::validate_name(name, self.config.max_name_length)
        });
        let email = self.text_field(source, "email", |email| {
            validation::validate_email(email, self.config.max_email_length)
        });
        let age = self.integer_field(source, "age");

        match (name, email, age) {
            (Ok(name), Ok(email), Ok(age)) => Ok(UserBase::new(name, email, age)),
            (name, email, age) => Err([name.err(), email.err(), age.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }

    fn text_field<S, F>(&self, source: &S, field: &str, rule: F) -> Result<String, FieldViolation>
    where
        S: AttributeSource + ?Sized,
        F: Fn(&str) -> Result<(), ViolationKind>,
    {
        let value = required(source, field)?;
        let text = validation::text(&value).map_err(|kind| FieldViolation::new(field, kind))?;
        rule(text).map_err(|kind| FieldViolation::new(field, kind))?;
        Ok(text.to_string())
    }

    fn integer_field<S, T>(&self, source: &S, field: &str) -> Result<T, FieldViolation>
    where
        S: AttributeSource + ?Sized,
        T: TryFrom<i64>,
    {
        let value = required(source, field)?;
        validation::integer(&value, self.config.coerce_numeric_strings)
            .map_err(|kind| FieldViolation::new(field, kind))
    }
}

fn object(input: &Value) -> ValidationResult<&Map<String, Value>> {
    input.as_object().ok_or_else(|| {
        debug!("user payload is not an object");
        ValidationError::single(BODY_FIELD, ViolationKind::ExpectedObject)
    })
}

fn required<'a, S: AttributeSource + ?Sized>(
    source: &'a S,
    field: &str,
) -> Result<Cow<'a, Value>, FieldViolation> {
    match source.attribute(field) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(FieldViolation::new(field, ViolationKind::Missing)),
    }
}

fn reject(violations: Vec<FieldViolation>) -> ValidationError {
    debug!(violations = violations.len(), "user payload rejected");
    ValidationError::new(violations)
}

/// Validate `input` as [`UserBase`] with the default configuration
pub fn validate_as_base(input: &Value) -> ValidationResult<UserBase> {
    UserSchema::default().validate_as_base(input)
}

/// Validate `input` as [`UserCreate`] with the default configuration
pub fn validate_as_create(input: &Value) -> ValidationResult<UserCreate> {
    UserSchema::default().validate_as_create(input)
}

/// Build a [`User`] from a stored record with the default configuration
pub fn from_persisted<S: AttributeSource + ?Sized>(record: &S) -> ValidationResult<User> {
    UserSchema::default().from_persisted(record)
}
