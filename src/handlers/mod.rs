//! Command Handlers module
//!
//! Handlers orchestrate business operations over the `UserStore`.

mod commands;
mod user_handler;


pub use commands::*;
pub use user_handler::CreateUserHandler;
