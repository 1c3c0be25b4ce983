//! User Creation Handler
//!
//! Registers a user: existence check, insert, then reload by id.

use std::sync::Arc;

use crate::domain::User;
use crate::error::{AppError, AppResult};
use crate::store::UserStore;

use super::CreateUserCommand;

/// Handler for user creation
#[derive(Clone)]
pub struct CreateUserHandler {
    store: Arc<dyn UserStore>,
}

impl CreateUserHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Execute the create user command.
    ///
    /// Store calls happen strictly in order (`find_by_name`, `create`,
    /// `find_by_id`) and the first failure ends the flow. Returns the user
    /// as reloaded from the store.
    pub async fn execute(&self, command: CreateUserCommand) -> AppResult<User> {
        let name = command
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(AppError::NameMissing)?;

        let existing = self
            .store
            .find_by_name(&name)
            .await
            .map_err(|e| AppError::CheckFailed(e.to_string()))?;

        if existing.is_some() {
            return Err(AppError::AlreadyExists(name));
        }

        // Not atomic with the check above; the store's unique constraint
        // catches a concurrent insert of the same name.
        let user_id = self
            .store
            .create(&name)
            .await
            .map_err(|e| AppError::CreateFailed(e.to_string()))?;

        self.store
            .find_by_id(user_id)
            .await
            .map_err(|_| AppError::ReloadFailed(name))
    }
}

