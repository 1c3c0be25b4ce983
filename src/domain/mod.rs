//! Domain module
//!
//! Core domain types.

pub mod user;

pub use user::{User, UserId};
