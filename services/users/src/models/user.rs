//! User shapes
//!
//! Three views of the same entity: the shared fields ([`UserBase`]), the
//! creation payload ([`UserCreate`]) and the stored record ([`User`]).
//! Instances are only produced by [`crate::schema::UserSchema`], so every
//! value here has already passed validation.

use serde::Serialize;

/// Fields shared by every user shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBase {
    name: String,
    email: String,
    age: i32,
}

impl UserBase {
    pub(crate) fn new(name: String, email: String, age: i32) -> Self {
        Self { name, email, age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

/// New user creation payload
///
/// Same fields as [`UserBase`] today; kept as its own shape so
/// create-only fields can be added without touching the other views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCreate {
    #[serde(flatten)]
    base: UserBase,
}

impl UserCreate {
    pub(crate) fn new(base: UserBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &UserBase {
        &self.base
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn email(&self) -> &str {
        self.base.email()
    }

    pub fn age(&self) -> i32 {
        self.base.age()
    }
}

impl From<UserCreate> for UserBase {
    fn from(create: UserCreate) -> Self {
        create.base
    }
}

/// User entity as stored, with its datastore-assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: i64,
    #[serde(flatten)]
    base: UserBase,
}

impl User {
    pub(crate) fn new(id: i64, base: UserBase) -> Self {
        Self { id, base }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn base(&self) -> &UserBase {
        &self.base
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn email(&self) -> &str {
        self.base.email()
    }

    pub fn age(&self) -> i32 {
        self.base.age()
    }
}
