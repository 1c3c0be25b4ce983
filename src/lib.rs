//! user_registry Library
//!
//! Re-exports modules for integration testing and the server binary.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
mod error;
pub mod handlers;
pub mod store;

pub use config::{Config, ConfigError};
pub use domain::{User, UserId};
pub use error::{AppError, AppResult, ErrorResponse};
pub use store::{InMemoryUserStore, PgUserStore, StoreError, UserStore};
