//! Command definitions
//!
//! Commands represent intentions to change the system state.

/// Command to register a new user
#[derive(Debug, Clone, Default)]
pub struct CreateUserCommand {
    /// Requested name; absent when the request carried none
    pub name: Option<String>,
}

impl CreateUserCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Command without a name, as built from an empty request body
    pub fn unnamed() -> Self {
        Self { name: None }
    }
}
