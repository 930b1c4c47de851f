//! API module - HTTP handlers, error mapping and routes.

pub mod error;
pub mod handlers;
pub mod routes;

use crate::core::LogStore;
use std::sync::Arc;

/// Application state shared across handlers
pub struct AppState {
    pub store: LogStore,
}

impl AppState {
    pub fn new(store: LogStore) -> Self {
        Self { store }
    }
}

pub type SharedState = Arc<AppState>;
