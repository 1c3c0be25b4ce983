//! Store Errors

use crate::domain::UserId;

/// Errors raised by [`UserStore`](super::UserStore) adapters
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row for the requested identifier
    #[error("user {0} not found")]
    NotFound(UserId),

    /// Name already taken (unique constraint)
    #[error("duplicate user name: {0}")]
    Duplicate(String),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend unavailable or otherwise failing
    #[error("{0}")]
    Unavailable(String),
}
