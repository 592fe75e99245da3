//! Field-level validation rules
//!
//! Each rule checks one JSON value and reports the reason it was rejected as
//! a [`ViolationKind`]. Field names are attached by the schema layer.

use common::ViolationKind;
use regex::Regex;
use serde_json::Value;
use std::num::IntErrorKind;
use std::sync::OnceLock;

/// Extract a string, rejecting every other JSON type
pub fn text(value: &Value) -> Result<&str, ViolationKind> {
    value.as_str().ok_or(ViolationKind::ExpectedString)
}

/// Extract an integer that fits `T`.
///
/// Accepts JSON integers, floats without a fractional part and, when
/// `coerce_strings` is set, numeric strings. Fractional values are rejected
/// rather than truncated.
pub fn integer<T: TryFrom<i64>>(value: &Value, coerce_strings: bool) -> Result<T, ViolationKind> {
    let wide = match value {
        Value::Number(number) => {
            if let Some(i) = number.as_i64() {
                i
            } else if number.as_u64().is_some() {
                return Err(ViolationKind::OutOfRange);
            } else {
                let f = number.as_f64().ok_or(ViolationKind::ExpectedInteger)?;
                whole_float(f)?
            }
        }
        Value::String(raw) if coerce_strings => integer_from_str(raw.trim())?,
        _ => return Err(ViolationKind::ExpectedInteger),
    };

    T::try_from(wide).map_err(|_| ViolationKind::OutOfRange)
}

fn integer_from_str(raw: &str) -> Result<i64, ViolationKind> {
    match raw.parse::<i64>() {
        Ok(i) => Ok(i),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(ViolationKind::OutOfRange)
        }
        Err(_) => match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => whole_float(f),
            _ => Err(ViolationKind::ExpectedInteger),
        },
    }
}

fn whole_float(f: f64) -> Result<i64, ViolationKind> {
    if f.fract() != 0.0 {
        return Err(ViolationKind::Fractional);
    }

    // i64::MAX is not representable as f64; the upper bound is exclusive
    if f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(ViolationKind::OutOfRange);
    }

    Ok(f as i64)
}

/// Validate a user name
pub fn validate_name(name: &str, max_length: usize) -> Result<(), ViolationKind> {
    if name.trim().is_empty() {
        return Err(ViolationKind::Empty);
    }

    if name.chars().count() > max_length {
        return Err(ViolationKind::TooLong { max: max_length });
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str, max_length: usize) -> Result<(), ViolationKind> {
    if email.is_empty() {
        return Err(ViolationKind::Empty);
    }

    if email.chars().count() > max_length {
        return Err(ViolationKind::TooLong { max: max_length });
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(ViolationKind::InvalidEmail);
    }

    Ok(())
}
