//! Repository port and implementations
//!
//! [`UserStore`] is the only way handlers reach storage. Each implementation
//! follows the same rules:
//! - "not found" comes from result cardinality, never from error messages
//! - uniqueness is left to the backend and classified on failure
//!   (no check-then-insert)
//! - every value is a bound parameter

pub mod memory;
pub mod users;

use async_trait::async_trait;

use crate::db::error_map::{self, ErrorClass};
use crate::models::{NewUser, User, UserId};

pub use memory::MemoryUserStore;
pub use users::PgUserRepo;

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: user '{id}'")]
    NotFound { id: UserId },

    #[error("duplicate key: {constraint}")]
    DuplicateKey { constraint: String },

    /// No connection to the backend has been established yet
    #[error("storage not ready")]
    NotReady,

    #[error("database error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match error_map::classify(&err) {
            ErrorClass::DuplicateKey => Self::DuplicateKey {
                constraint: error_map::constraint_name(&err)
                    .unwrap_or_else(|| "unique".to_owned()),
            },
            ErrorClass::Storage => Self::Storage(err),
        }
    }
}

/// Typed operations on the `users` table.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All records, ascending by id.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn get(&self, id: UserId) -> Result<User, StoreError>;

    /// Insert and return the stored record with generated id and timestamps.
    async fn create(&self, user: &NewUser) -> Result<User, StoreError>;

    /// Full replace of name, lastname and email; refreshes `updated_at`.
    async fn update(&self, id: UserId, user: &NewUser) -> Result<User, StoreError>;

    /// Remove permanently, returning the record as it was.
    async fn delete(&self, id: UserId) -> Result<User, StoreError>;

    /// Cheap liveness round-trip against the backend.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
