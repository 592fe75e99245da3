//! User schema layer
//!
//! Validates untyped user records into typed shapes for a request/response
//! layer and converts stored records into [`User`] values. Transport and
//! persistence live elsewhere; this crate only checks and shapes data.
//!
//! ```rust
//! use serde_json::json;
//! use users::schema::validate_as_create;
//!
//! let user = validate_as_create(&json!({
//!     "name": "Ada",
//!     "email": "ada@example.com",
//!     "age": 36,
//! }))
//! .unwrap();
//! assert_eq!(user.age(), 36);
//!
//! let err = validate_as_create(&json!({ "name": "Ada", "email": "nope" })).unwrap_err();
//! assert_eq!(err.fields(), vec!["email", "age"]);
//! ```

pub mod models;
pub mod schema;
pub mod validation;

pub use models::{User, UserBase, UserCreate, UserRecord};
pub use schema::{AttributeSource, UserSchema, from_persisted, validate_as_base, validate_as_create};
