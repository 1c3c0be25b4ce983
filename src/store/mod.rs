//! User persistence
//!
//! The [`UserStore`] trait is the only way the handlers reach storage.
//! Adapters: [`PgUserStore`] for Postgres and [`InMemoryUserStore`] for
//! local runs and tests.

mod error;
mod memory;
mod postgres;

use async_trait::async_trait;

use crate::domain::{User, UserId};

pub use error::StoreError;
pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

/// Storage operations needed to register a user.
///
/// Every operation either yields its result or a [`StoreError`], never both.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a user up by name.
    ///
    /// `Ok(None)` means "no such user" and is not an error.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user and return its identifier.
    async fn create(&self, name: &str) -> Result<UserId, StoreError>;

    /// Load a user by identifier. A missing row is [`StoreError::NotFound`].
    async fn find_by_id(&self, id: UserId) -> Result<User, StoreError>;
}
