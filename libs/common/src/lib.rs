//! Common library for the user services
//!
//! This crate provides shared functionality used across the services,
//! including validation error types, schema configuration and tracing
//! setup.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::SchemaConfig;
pub use error::{FieldViolation, ValidationError, ValidationResult, ViolationKind};
