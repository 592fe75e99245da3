//! User service models

pub mod record;
pub mod user;

// Re-export for convenience
pub use record::UserRecord;
pub use user::{User, UserBase, UserCreate};
