//! Postgres user store
//!
//! Table layout lives in `migrations/0001_create_users.sql`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{User, UserId};

use super::{StoreError, UserStore};

/// Postgres unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// `UserStore` backed by the `users` table
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user((id, name, created_at): (i64, String, DateTime<Utc>)) -> User {
    User::new(UserId::new(id), name).with_created_at(created_at)
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        let row: Option<(i64, String, DateTime<Utc>)> =
            sqlx::query_as("SELECT id, name, created_at FROM users WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(row_to_user))
    }

    async fn create(&self, name: &str) -> Result<UserId, StoreError> {
        let result: Result<i64, sqlx::Error> =
            sqlx::query_scalar("INSERT INTO users (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&self.pool)
                .await;

        match result {
            Ok(id) => Ok(UserId::new(id)),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                Err(StoreError::Duplicate(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, StoreError> {
        let row: Option<(i64, String, DateTime<Utc>)> =
            sqlx::query_as("SELECT id, name, created_at FROM users WHERE id = $1")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await?;

        row.map(row_to_user).ok_or(StoreError::NotFound(id))
    }
}
