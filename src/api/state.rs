//! Shared router state

use std::sync::Arc;

use crate::store::UserStore;

/// State handed to every route
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}
