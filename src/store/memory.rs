//! In-memory user store
//!
//! Used when no `DATABASE_URL` is configured and by the integration tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{User, UserId};

use super::{StoreError, UserStore};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<UserId, User>,
    next_id: i64,
}

/// `UserStore` backed by a `HashMap`, ids assigned sequentially from 1
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.name() == name).cloned())
    }

    async fn create(&self, name: &str) -> Result<UserId, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.name() == name) {
            return Err(StoreError::Duplicate(name.to_string()));
        }

        inner.next_id += 1;
        let id = UserId::new(inner.next_id);
        inner
            .users
            .insert(id, User::new(id, name).with_created_at(Utc::now()));

        Ok(id)
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, StoreError> {
        self.inner
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}
