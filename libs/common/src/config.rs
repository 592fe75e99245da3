//! Schema configuration
//!
//! Limits applied by the user schema validator, read from environment
//! variables with sensible defaults.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// Schema validation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Maximum length of a user name, in characters
    pub max_name_length: usize,
    /// Maximum length of an email address, in characters
    pub max_email_length: usize,
    /// Accept integer fields sent as numeric strings (`"30"`)
    pub coerce_numeric_strings: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            max_name_length: 255,
            max_email_length: 254,
            coerce_numeric_strings: true,
        }
    }
}

impl SchemaConfig {
    /// Create a new SchemaConfig from environment variables
    ///
    /// # Environment Variables
    /// - `USER_SCHEMA_MAX_NAME_LENGTH`: maximum name length (default: 255)
    /// - `USER_SCHEMA_MAX_EMAIL_LENGTH`: maximum email length (default: 254)
    /// - `USER_SCHEMA_COERCE_NUMERIC_STRINGS`: `true`/`false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            max_name_length: env_or("USER_SCHEMA_MAX_NAME_LENGTH", defaults.max_name_length)?,
            max_email_length: env_or("USER_SCHEMA_MAX_EMAIL_LENGTH", defaults.max_email_length)?,
            coerce_numeric_strings: env_or(
                "USER_SCHEMA_COERCE_NUMERIC_STRINGS",
                defaults.coerce_numeric_strings,
            )?,
        })
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> ConfigResult<T> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
