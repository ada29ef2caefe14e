//! Global application state.
//!
//! Built once at startup and cloned into every request.

use crate::core::greeting::greeting_service::GreetingService;
use axum::extract::FromRef;

/// Global application state.
#[derive(Clone, Debug, Default, FromRef)]
pub struct AppState {
    greetings: GreetingService,
}

impl AppState {
    /// Constructs a new [`AppState`] with a fresh greeting counter.
    pub fn new() -> Self {
        Self::default()
    }
}
