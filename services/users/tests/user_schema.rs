//! Integration tests for the user schema layer
//!
//! These tests drive the public validation operations the way a request
//! handler or repository would.

use common::{SchemaConfig, ViolationKind};
use serde_json::{Value, json};
use std::borrow::Cow;
use users::{
    AttributeSource, User, UserRecord, UserSchema, from_persisted, validate_as_base,
    validate_as_create,
};

fn valid_body() -> Value {
    json!({ "name": "Ada Lovelace", "email": "ada@example.com", "age": 36 })
}

#[test]
fn test_valid_input_round_trips() -> anyhow::Result<()> {
    let body = valid_body();

    let base = validate_as_base(&body)?;
    assert_eq!(base.name(), "Ada Lovelace");
    assert_eq!(base.email(), "ada@example.com");
    assert_eq!(base.age(), 36);
    assert_eq!(serde_json::to_value(&base)?, body);

    let create = validate_as_create(&body)?;
    assert_eq!(create.base(), &base);
    assert_eq!(serde_json::to_value(&create)?, body);

    Ok(())
}

#[test]
fn test_unknown_fields_are_ignored() -> anyhow::Result<()> {
    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "age": 36,
        "password": "hunter2",
        "id": 99
    });

    let create = validate_as_create(&body)?;
    assert_eq!(
        serde_json::to_value(&create)?,
        json!({ "name": "Ada", "email": "ada@example.com", "age": 36 })
    );

    Ok(())
}

#[test]
fn test_missing_fields_are_named_exactly() {
    let cases = [
        (json!({ "email": "a@b.com", "age": 1 }), vec!["name"]),
        (json!({ "name": "A", "age": 1 }), vec!["email"]),
        (json!({ "name": "A", "email": "a@b.com" }), vec!["age"]),
        (json!({ "age": 1 }), vec!["name", "email"]),
        (json!({}), vec!["name", "email", "age"]),
    ];

    for (body, expected) in cases {
        let err = validate_as_create(&body).unwrap_err();
        assert_eq!(err.fields(), expected, "body: {}", body);
        for violation in err.violations() {
            assert_eq!(violation.kind(), ViolationKind::Missing);
            assert_eq!(violation.message(), "field required");
        }
    }
}

#[test]
fn test_invalid_email_is_reported() {
    let err = validate_as_base(&json!({ "name": "A", "email": "not-an-email", "age": 30 }))
        .unwrap_err();

    assert_eq!(err.fields(), vec!["email"]);
    assert_eq!(err.violations()[0].message(), "invalid email format");
}

#[test]
fn test_non_numeric_age_is_reported() {
    let err = validate_as_base(&json!({ "name": "A", "email": "a@b.com", "age": "twelve" }))
        .unwrap_err();

    assert_eq!(err.fields(), vec!["age"]);
    assert_eq!(err.violations()[0].message(), "expected integer");
}

#[test]
fn test_age_is_never_truncated() {
    let err = validate_as_base(&json!({ "name": "A", "email": "a@b.com", "age": 30.5 }))
        .unwrap_err();
    assert_eq!(
        err.violation("age").unwrap().kind(),
        ViolationKind::Fractional
    );

    let whole = validate_as_base(&json!({ "name": "A", "email": "a@b.com", "age": 30.0 })).unwrap();
    assert_eq!(whole.age(), 30);

    let text = validate_as_base(&json!({ "name": "A", "email": "a@b.com", "age": "30" })).unwrap();
    assert_eq!(text.age(), 30);
}

#[test]
fn test_every_violation_is_collected() {
    let err = validate_as_create(&json!({ "name": "", "email": 42, "age": false })).unwrap_err();

    let kinds: Vec<_> = err
        .violations()
        .iter()
        .map(|v| (v.field(), v.kind()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("name", ViolationKind::Empty),
            ("email", ViolationKind::ExpectedString),
            ("age", ViolationKind::ExpectedInteger),
        ]
    );

    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({
            "errors": [
                { "field": "name", "message": "must not be empty" },
                { "field": "email", "message": "expected string" },
                { "field": "age", "message": "expected integer" }
            ]
        })
    );
}

#[test]
fn test_validation_is_deterministic_and_idempotent() -> anyhow::Result<()> {
    let body = json!({ "name": "Grace", "email": "grace@navy.mil", "age": "85" });

    let first = validate_as_create(&body)?;
    let again = validate_as_create(&serde_json::to_value(&first)?)?;
    assert_eq!(first, again);

    let bad = json!({ "name": "Grace", "email": "nope" });
    assert_eq!(
        validate_as_create(&bad).unwrap_err(),
        validate_as_create(&bad).unwrap_err()
    );

    Ok(())
}

#[test]
fn test_from_persisted_json_record() -> anyhow::Result<()> {
    let record = json!({ "id": 7, "name": "A", "email": "a@b.com", "age": 30 });

    let user = from_persisted(&record)?;
    assert_eq!(user.id(), 7);
    assert_eq!(user.name(), "A");
    assert_eq!(user.email(), "a@b.com");
    assert_eq!(user.age(), 30);
    assert_eq!(serde_json::to_value(&user)?, record);

    Ok(())
}

#[test]
fn test_from_persisted_requires_id() {
    let err = from_persisted(&json!({ "name": "A", "email": "a@b.com", "age": 30 })).unwrap_err();
    assert_eq!(err.fields(), vec!["id"]);

    let err = from_persisted(&json!({ "id": "seven", "name": "A", "email": "bad", "age": 30 }))
        .unwrap_err();
    assert_eq!(err.fields(), vec!["id", "email"]);
}

#[test]
fn test_from_persisted_row() -> anyhow::Result<()> {
    let row = UserRecord {
        id: 7,
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        age: 30,
    };

    let user = from_persisted(&row)?;
    assert_eq!(UserRecord::from(user), row);

    Ok(())
}

/// A persistence type that only knows its own columns
struct LegacyAccount {
    account_id: i64,
    display_name: String,
    mail: String,
    years: i32,
}

impl AttributeSource for LegacyAccount {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        let value = match name {
            "id" => Value::from(self.account_id),
            "name" => Value::from(self.display_name.clone()),
            "email" => Value::from(self.mail.clone()),
            "age" => Value::from(self.years),
            _ => return None,
        };
        Some(Cow::Owned(value))
    }
}

#[test]
fn test_from_persisted_custom_source() -> anyhow::Result<()> {
    let account = LegacyAccount {
        account_id: 12,
        display_name: "Linus".to_string(),
        mail: "linus@kernel.org".to_string(),
        years: 55,
    };

    let user: User = UserSchema::default().from_persisted(&account)?;
    assert_eq!(
        serde_json::to_value(&user)?,
        json!({ "id": 12, "name": "Linus", "email": "linus@kernel.org", "age": 55 })
    );

    Ok(())
}

#[test]
fn test_schema_with_custom_config() {
    let schema = UserSchema::new(SchemaConfig {
        max_email_length: 10,
        ..SchemaConfig::default()
    });
    assert_eq!(schema.config().max_email_length, 10);

    let err = schema.validate_as_base(&valid_body()).unwrap_err();
    assert_eq!(
        err.violation("email").unwrap().kind(),
        ViolationKind::TooLong { max: 10 }
    );
}
