//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::User;
use crate::error::AppResult;
use crate::handlers::{CreateUserCommand, CreateUserHandler};

use super::AppState;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Only the name of the stored user is exposed
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserResponse {
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name().to_string(),
        }
    }
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

// =========================================================================
// POST /users
// =========================================================================

/// Create a new user
async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let handler = CreateUserHandler::new(state.store);

    let user = handler
        .execute(CreateUserCommand { name: request.name })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
