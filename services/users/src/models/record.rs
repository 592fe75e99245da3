//! Row type for the `users` table

use serde_json::Value;
use sqlx::FromRow;
use std::borrow::Cow;

use crate::models::User;
use crate::schema::AttributeSource;

/// A user row as read from storage, not yet validated
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl AttributeSource for UserRecord {
    fn attribute(&self, name: &str) -> Option<Cow<'_, Value>> {
        let value = match name {
            "id" => Value::from(self.id),
            "name" => Value::from(self.name.as_str()),
            "email" => Value::from(self.email.as_str()),
            "age" => Value::from(self.age),
            _ => return None,
        };
        Some(Cow::Owned(value))
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            age: user.age(),
        }
    }
}
